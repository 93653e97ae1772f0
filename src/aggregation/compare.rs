// Comparison mode: one metric per camera, ranked highest first

use super::listing::summarize_camera;
use super::{AggregateOptions, group_by_camera};
use crate::models::{ComparisonReport, ComparisonRow, Metric, Month, MonthCorpus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    pub metric: Metric,
    /// Keep only the first N ranked rows. Default: all rows.
    pub limit: Option<usize>,
}

impl CompareOptions {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            limit: None,
        }
    }
}

pub fn compare_cameras(
    corpus: &MonthCorpus,
    month: Month,
    options: &AggregateOptions,
    compare: CompareOptions,
) -> ComparisonReport {
    let rows: Vec<ComparisonRow> = group_by_camera(corpus, options)
        .into_iter()
        .map(|(id, appearances)| {
            let summary = summarize_camera(id, &appearances);
            let metric_value = match compare.metric {
                Metric::Infractions => summary.infractions_total as f64,
                Metric::Frames => summary.frames_total as f64,
                Metric::Efficiency => summary.efficiency,
            };
            ComparisonRow {
                rank: 0,
                camera_id: id,
                name: summary.name,
                metric_value,
                infractions: summary.infractions_total,
                frames: summary.frames_total,
                efficiency: summary.efficiency,
                used_storage: summary.used_storage,
            }
        })
        .collect();

    let mut rows = rank_rows(rows);
    if let Some(limit) = compare.limit {
        rows.truncate(limit);
    }

    ComparisonReport {
        month,
        scope: options.scope,
        metric: compare.metric,
        available_weeks: corpus.available_weeks(options.scope),
        rows,
    }
}

/// Order by metric value descending, ties by camera id ascending, then number ranks 1..=N without gaps.
pub fn rank_rows(mut rows: Vec<ComparisonRow>) -> Vec<ComparisonRow> {
    rows.sort_by(|a, b| {
        b.metric_value
            .total_cmp(&a.metric_value)
            .then(a.camera_id.cmp(&b.camera_id))
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}
