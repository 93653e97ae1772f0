// Performance-analysis mode: per-day statistics and efficiency per camera

use super::{AggregateOptions, Appearance, group_by_camera, latest_name, merge_daily};
use crate::models::{CameraId, CameraPerformance, Month, MonthCorpus, PerformanceReport};
use crate::stats::{count_statistics, efficiency};

pub fn analyze_performance(
    corpus: &MonthCorpus,
    month: Month,
    options: &AggregateOptions,
) -> PerformanceReport {
    let cameras = group_by_camera(corpus, options)
        .into_iter()
        .map(|(id, appearances)| analyze_camera(id, &appearances))
        .collect();
    PerformanceReport {
        month,
        scope: options.scope,
        available_weeks: corpus.available_weeks(options.scope),
        cameras,
    }
}

fn analyze_camera(id: CameraId, appearances: &[Appearance<'_>]) -> CameraPerformance {
    let daily_infractions = merge_daily(appearances, |r| &r.infractions);
    let daily_frames = merge_daily(appearances, |r| &r.frames);

    let infractions = count_statistics(daily_infractions.values().copied());
    let frames = count_statistics(daily_frames.values().copied());
    let infractions_total: u64 = daily_infractions.values().sum();
    let frames_total: u64 = daily_frames.values().sum();

    CameraPerformance {
        camera_id: id,
        name: latest_name(appearances),
        weeks: appearances.iter().map(|(week, _)| *week).collect(),
        infractions,
        frames,
        efficiency: efficiency(infractions_total, frames_total),
    }
}
