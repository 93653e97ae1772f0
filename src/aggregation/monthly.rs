// Monthly-report mode: listing + top cameras + weekly and daily trends over the whole month

use std::collections::BTreeMap;

use super::{AggregateOptions, CompareOptions, compare_cameras, list_cameras};
use crate::models::{
    DayTrend, Metric, Month, MonthCorpus, MonthSummary, MonthlyReport, Scope, WeekTrend,
};
use crate::stats::efficiency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyOptions {
    /// Cameras kept in the top-by-infractions ranking. Default: 3.
    pub top_cameras: usize,
    /// Most recent dates kept in the daily trend. Default: 7.
    pub recent_days: usize,
}

impl Default for MonthlyOptions {
    fn default() -> Self {
        Self {
            top_cameras: 3,
            recent_days: 7,
        }
    }
}

pub fn monthly_report(corpus: &MonthCorpus, month: Month, options: MonthlyOptions) -> MonthlyReport {
    let scope = AggregateOptions::new(Scope::Month);
    let listing = list_cameras(corpus, month, &scope);
    let top = compare_cameras(
        corpus,
        month,
        &scope,
        CompareOptions {
            metric: Metric::Infractions,
            limit: Some(options.top_cameras),
        },
    );

    let mut weekly_trend = Vec::new();
    let mut daily: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for (week, snapshot) in corpus.iter_scope(Scope::Month) {
        let mut infractions: u64 = 0;
        let mut frames: u64 = 0;
        for record in snapshot.cameras.values() {
            for (date, count) in &record.infractions {
                daily.entry(date.as_str()).or_default().0 += count;
                infractions += count;
            }
            for (date, count) in &record.frames {
                daily.entry(date.as_str()).or_default().1 += count;
                frames += count;
            }
        }
        weekly_trend.push(WeekTrend {
            week,
            infractions,
            frames,
            efficiency: efficiency(infractions, frames),
        });
    }

    let skip = daily.len().saturating_sub(options.recent_days);
    let recent_days = daily
        .into_iter()
        .skip(skip)
        .map(|(date, (infractions, frames))| DayTrend {
            date: date.to_string(),
            infractions,
            frames,
        })
        .collect();

    let infractions_total: u64 = weekly_trend.iter().map(|w| w.infractions).sum();
    let frames_total: u64 = weekly_trend.iter().map(|w| w.frames).sum();

    MonthlyReport {
        month,
        summary: MonthSummary {
            infractions_total,
            frames_total,
            efficiency: efficiency(infractions_total, frames_total),
            weeks_available: listing.available_weeks.len(),
            cameras_active: listing.cameras.len(),
        },
        available_weeks: listing.available_weeks,
        cameras: listing.cameras,
        top_cameras: top.rows,
        weekly_trend,
        recent_days,
    }
}
