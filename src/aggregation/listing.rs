// List/status mode: per-camera totals and latest status strings

use std::collections::BTreeSet;

use super::{AggregateOptions, Appearance, group_by_camera, latest_name};
use crate::models::{
    CameraDetail, CameraId, CameraListing, CameraRecord, CameraStatus, CameraSummary, DailyEntry,
    Month, MonthCorpus, WeekNumber, WeekPresence,
};
use crate::stats::efficiency;

/// Every camera present in the scope, ordered by id. Absent weeks contribute nothing.
pub fn list_cameras(corpus: &MonthCorpus, month: Month, options: &AggregateOptions) -> CameraListing {
    let cameras: Vec<CameraSummary> = group_by_camera(corpus, options)
        .into_iter()
        .map(|(id, appearances)| summarize_camera(id, &appearances))
        .collect();
    CameraListing {
        month,
        scope: options.scope,
        available_weeks: corpus.available_weeks(options.scope),
        count: cameras.len(),
        cameras,
    }
}

/// Fold one camera's weekly appearances; status strings come from the latest week.
pub(crate) fn summarize_camera(id: CameraId, appearances: &[Appearance<'_>]) -> CameraSummary {
    let weeks: Vec<WeekPresence> = appearances
        .iter()
        .map(|&(week, record)| WeekPresence {
            week,
            reported_total: record.total,
            infractions: record.infractions_total(),
            frames: record.frames_total(),
            used_storage: record.used_storage.clone(),
        })
        .collect();

    let reported_total: u64 = weeks.iter().map(|w| w.reported_total).sum();
    let infractions_total: u64 = weeks.iter().map(|w| w.infractions).sum();
    let frames_total: u64 = weeks.iter().map(|w| w.frames).sum();

    let latest = appearances.last().map(|&(_, record)| record);
    let name = latest_name(appearances);

    CameraSummary {
        camera_id: id,
        name,
        weeks,
        reported_total,
        infractions_total,
        frames_total,
        efficiency: efficiency(infractions_total, frames_total),
        uptime: latest.map(|r| r.uptime.trim().to_string()).unwrap_or_default(),
        used_storage: latest.map(|r| r.used_storage.trim().to_string()).unwrap_or_default(),
    }
}

/// One camera in one week, optionally with its per-day breakdown.
pub fn camera_status(
    corpus: &MonthCorpus,
    month: Month,
    week: WeekNumber,
    camera_id: CameraId,
    include_daily: bool,
) -> CameraStatus {
    let snapshot = corpus.week(week);
    let camera = snapshot
        .and_then(|s| s.get(camera_id))
        .map(|record| camera_detail(record, include_daily));
    CameraStatus {
        month,
        week,
        camera_id,
        week_available: snapshot.is_some(),
        camera,
    }
}

fn camera_detail(record: &CameraRecord, include_daily: bool) -> CameraDetail {
    let infractions_total = record.infractions_total();
    let frames_total = record.frames_total();
    CameraDetail {
        name: record.name.trim().to_string(),
        uptime: record.uptime.trim().to_string(),
        used_storage: record.used_storage.trim().to_string(),
        reported_total: record.total,
        infractions_total,
        frames_total,
        efficiency: efficiency(infractions_total, frames_total),
        daily: include_daily.then(|| daily_breakdown(record)),
    }
}

/// Union of dates from both maps, ascending; a date missing from one map stays `None` there.
fn daily_breakdown(record: &CameraRecord) -> Vec<DailyEntry> {
    let dates: BTreeSet<&String> = record.infractions.keys().chain(record.frames.keys()).collect();
    dates
        .into_iter()
        .map(|date| DailyEntry {
            date: date.clone(),
            infractions: record.infractions.get(date).copied(),
            frames: record.frames.get(date).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeeklySnapshot;

    fn record(infractions: &[(&str, u64)], frames: &[(&str, u64)]) -> CameraRecord {
        CameraRecord {
            name: "Cam".into(),
            uptime: " 3 days \n".into(),
            used_storage: "40%".into(),
            total: infractions.iter().map(|(_, c)| c).sum(),
            infractions: infractions.iter().map(|(d, c)| (d.to_string(), *c)).collect(),
            frames: frames.iter().map(|(d, c)| (d.to_string(), *c)).collect(),
        }
    }

    #[test]
    fn daily_breakdown_keeps_missing_days_distinct_from_zero() {
        let r = record(&[("2025-09-29", 0)], &[("2025-09-30", 12)]);
        let daily = daily_breakdown(&r);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, "2025-09-29");
        assert_eq!(daily[0].infractions, Some(0));
        assert_eq!(daily[0].frames, None);
        assert_eq!(daily[1].infractions, None);
        assert_eq!(daily[1].frames, Some(12));
    }

    #[test]
    fn status_distinguishes_missing_week_and_missing_camera() {
        let w1 = WeekNumber::new(1).unwrap();
        let w2 = WeekNumber::new(2).unwrap();
        let corpus = MonthCorpus::new().with_week(
            w1,
            WeeklySnapshot::from_iter([(1, record(&[("2025-09-29", 4)], &[]))]),
        );

        let missing_camera = camera_status(&corpus, Month::Septiembre, w1, 9, false);
        assert!(missing_camera.week_available);
        assert!(missing_camera.camera.is_none());

        let missing_week = camera_status(&corpus, Month::Septiembre, w2, 1, false);
        assert!(!missing_week.week_available);
        assert!(missing_week.camera.is_none());

        let found = camera_status(&corpus, Month::Septiembre, w1, 1, false);
        let detail = found.camera.unwrap();
        assert_eq!(detail.uptime, "3 days");
        assert!(detail.daily.is_none());
    }
}
