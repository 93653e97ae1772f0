// Aggregation & comparison engine: pure functions from a month corpus to per-mode results.
// Absent weeks, cameras and dates yield empty slices; nothing here fails.

mod compare;
mod listing;
mod monthly;
mod performance;
mod search;

pub use compare::{CompareOptions, compare_cameras, rank_rows};
pub use listing::{camera_status, list_cameras};
pub use monthly::{MonthlyOptions, monthly_report};
pub use performance::analyze_performance;
pub use search::search_infractions;

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{CameraId, CameraRecord, MonthCorpus, Scope, WeekNumber};

/// Options shared by every aggregation mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Weeks to aggregate over. Default: the whole month.
    pub scope: Scope,
    /// Restrict to these cameras. Default (`None`): every camera.
    pub cameras: Option<BTreeSet<CameraId>>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            scope: Scope::Month,
            cameras: None,
        }
    }
}

impl AggregateOptions {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            cameras: None,
        }
    }

    pub fn with_camera(mut self, id: CameraId) -> Self {
        self.cameras.get_or_insert_with(BTreeSet::new).insert(id);
        self
    }

    pub fn includes(&self, id: CameraId) -> bool {
        self.cameras.as_ref().is_none_or(|set| set.contains(&id))
    }
}

/// A camera's record in one week.
pub(crate) type Appearance<'a> = (WeekNumber, &'a CameraRecord);

/// Group records by camera id across the weeks in scope; each camera's appearances are in week order.
pub(crate) fn group_by_camera<'a>(
    corpus: &'a MonthCorpus,
    options: &AggregateOptions,
) -> BTreeMap<CameraId, Vec<Appearance<'a>>> {
    let mut by_id: BTreeMap<CameraId, Vec<Appearance<'a>>> = BTreeMap::new();
    for (week, snapshot) in corpus.iter_scope(options.scope) {
        for (id, record) in &snapshot.cameras {
            if options.includes(*id) {
                by_id.entry(*id).or_default().push((week, record));
            }
        }
    }
    by_id
}

/// Latest non-blank camera name across appearances; blank when no week names it.
pub(crate) fn latest_name(appearances: &[Appearance<'_>]) -> String {
    appearances
        .iter()
        .rev()
        .map(|(_, record)| record.name.trim())
        .find(|name| !name.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Sum per-day counts by date across appearances (the same date in two weeks is added up).
pub(crate) fn merge_daily<'a, F>(appearances: &[Appearance<'a>], pick: F) -> BTreeMap<&'a str, u64>
where
    F: Fn(&'a CameraRecord) -> &'a BTreeMap<String, u64>,
{
    let mut merged: BTreeMap<&'a str, u64> = BTreeMap::new();
    for &(_, record) in appearances {
        for (date, count) in pick(record) {
            *merged.entry(date.as_str()).or_default() += count;
        }
    }
    merged
}
