// Upstream camera documents: one record per camera, one snapshot per week, one corpus per month

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Scope, WeekNumber};

/// Camera identifier; stable across weeks. Upstream JSON keys are numeric strings ("1", "5").
pub type CameraId = u32;

/// Per-day counts keyed by ISO date ("2025-09-29"); key order is chronological.
pub type DailyCounts = BTreeMap<String, u64>;

/// One camera's figures for one week, as published upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRecord {
    #[serde(rename = "camera", default)]
    pub name: String,
    #[serde(default)]
    pub uptime: String,
    #[serde(default)]
    pub used_storage: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub infractions: DailyCounts,
    #[serde(default)]
    pub frames: DailyCounts,
}

impl CameraRecord {
    pub fn infractions_total(&self) -> u64 {
        self.infractions.values().sum()
    }

    pub fn frames_total(&self) -> u64 {
        self.frames.values().sum()
    }
}

/// One week's document: camera id -> record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySnapshot {
    pub cameras: BTreeMap<CameraId, CameraRecord>,
}

impl WeeklySnapshot {
    pub fn new(cameras: BTreeMap<CameraId, CameraRecord>) -> Self {
        Self { cameras }
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    pub fn get(&self, id: CameraId) -> Option<&CameraRecord> {
        self.cameras.get(&id)
    }
}

impl FromIterator<(CameraId, CameraRecord)> for WeeklySnapshot {
    fn from_iter<I: IntoIterator<Item = (CameraId, CameraRecord)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Up to five weekly snapshots of a month. A `None` slot is a week with no data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthCorpus {
    weeks: [Option<WeeklySnapshot>; 5],
}

impl MonthCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, week: WeekNumber, snapshot: WeeklySnapshot) {
        self.weeks[week.index()] = Some(snapshot);
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with_week(mut self, week: WeekNumber, snapshot: WeeklySnapshot) -> Self {
        self.insert(week, snapshot);
        self
    }

    pub fn week(&self, week: WeekNumber) -> Option<&WeeklySnapshot> {
        self.weeks[week.index()].as_ref()
    }

    /// Present weeks in ascending order, restricted to `scope`.
    pub fn iter_scope(&self, scope: Scope) -> impl Iterator<Item = (WeekNumber, &WeeklySnapshot)> {
        WeekNumber::all()
            .filter(move |w| scope.includes(*w))
            .filter_map(|w| self.week(w).map(|s| (w, s)))
    }

    /// Week numbers with data inside `scope`.
    pub fn available_weeks(&self, scope: Scope) -> Vec<WeekNumber> {
        self.iter_scope(scope).map(|(w, _)| w).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.iter().all(Option::is_none)
    }
}
