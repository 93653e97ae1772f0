// Aggregation outputs: one struct per tool mode, all serializable as-is for structured responses

use serde::{Deserialize, Serialize};

use super::{CameraId, Month, Scope, WeekNumber};

/// Descriptive statistics over a sequence; an empty sequence is all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub count: usize,
    pub total: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Comparison metric chosen by the caller; rows are always ordered highest value first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Infractions,
    Frames,
    Efficiency,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Infractions => "infractions",
            Metric::Frames => "frames",
            Metric::Efficiency => "efficiency",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Infractions => "Infractions",
            Metric::Frames => "Frames",
            Metric::Efficiency => "Efficiency",
        }
    }
}

/// Predicates for per-day infraction search. Every set predicate must hold (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Exact ISO date ("2025-09-29").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Keep days with at least this many infractions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_infractions: Option<u64>,
    /// Keep days with at most this many infractions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_infractions: Option<u64>,
    /// Keep only days that recorded exactly zero infractions.
    #[serde(default)]
    pub zero_infractions: bool,
}

impl SearchFilter {
    pub fn matches(&self, date: &str, infractions: u64) -> bool {
        if self.date.as_deref().is_some_and(|d| d != date) {
            return false;
        }
        if self.min_infractions.is_some_and(|min| infractions < min) {
            return false;
        }
        if self.max_infractions.is_some_and(|max| infractions > max) {
            return false;
        }
        !self.zero_infractions || infractions == 0
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.min_infractions.is_none()
            && self.max_infractions.is_none()
            && !self.zero_infractions
    }
}

/// A camera's appearance in one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPresence {
    pub week: WeekNumber,
    pub reported_total: u64,
    pub infractions: u64,
    pub frames: u64,
    pub used_storage: String,
}

/// List/status row: totals across the scope plus the latest status strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSummary {
    pub camera_id: CameraId,
    pub name: String,
    pub weeks: Vec<WeekPresence>,
    /// Sum of the upstream `total` field.
    pub reported_total: u64,
    /// Sum of the per-day infraction counts.
    pub infractions_total: u64,
    pub frames_total: u64,
    pub efficiency: f64,
    pub uptime: String,
    pub used_storage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraListing {
    pub month: Month,
    pub scope: Scope,
    pub available_weeks: Vec<WeekNumber>,
    pub count: usize,
    pub cameras: Vec<CameraSummary>,
}

/// One day of a camera's breakdown. `None` means the day is missing from that map, not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: String,
    pub infractions: Option<u64>,
    pub frames: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDetail {
    pub name: String,
    pub uptime: String,
    pub used_storage: String,
    pub reported_total: u64,
    pub infractions_total: u64,
    pub frames_total: u64,
    pub efficiency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<Vec<DailyEntry>>,
}

/// Single camera in a single week. `camera` is `None` when the week or the camera has no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraStatus {
    pub month: Month,
    pub week: WeekNumber,
    pub camera_id: CameraId,
    pub week_available: bool,
    pub camera: Option<CameraDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPerformance {
    pub camera_id: CameraId,
    pub name: String,
    pub weeks: Vec<WeekNumber>,
    /// Over per-day infraction counts.
    pub infractions: Statistics,
    /// Over per-day frame counts.
    pub frames: Statistics,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub month: Month,
    pub scope: Scope,
    pub available_weeks: Vec<WeekNumber>,
    pub cameras: Vec<CameraPerformance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub rank: usize,
    pub camera_id: CameraId,
    pub name: String,
    pub metric_value: f64,
    pub infractions: u64,
    pub frames: u64,
    pub efficiency: f64,
    pub used_storage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub month: Month,
    pub scope: Scope,
    pub metric: Metric,
    pub available_weeks: Vec<WeekNumber>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub week: WeekNumber,
    pub camera_id: CameraId,
    pub camera_name: String,
    pub infractions: u64,
    /// Frames for the same date, if that camera reported any.
    pub frames: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateGroup {
    pub date: String,
    pub matches: Vec<SearchMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub month: Month,
    pub scope: Scope,
    pub filter: SearchFilter,
    pub available_weeks: Vec<WeekNumber>,
    pub count: usize,
    pub groups: Vec<DateGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekTrend {
    pub week: WeekNumber,
    pub infractions: u64,
    pub frames: u64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTrend {
    pub date: String,
    pub infractions: u64,
    pub frames: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub infractions_total: u64,
    pub frames_total: u64,
    pub efficiency: f64,
    pub weeks_available: usize,
    pub cameras_active: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: Month,
    pub available_weeks: Vec<WeekNumber>,
    pub summary: MonthSummary,
    pub cameras: Vec<CameraSummary>,
    pub top_cameras: Vec<ComparisonRow>,
    pub weekly_trend: Vec<WeekTrend>,
    pub recent_days: Vec<DayTrend>,
}

/// Output of any aggregation mode; the renderer's input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AggregatedResult {
    Listing(CameraListing),
    Status(CameraStatus),
    Performance(PerformanceReport),
    Comparison(ComparisonReport),
    Search(SearchReport),
    Monthly(MonthlyReport),
}

impl AggregatedResult {
    /// True when the aggregation found nothing to report for its slice.
    pub fn is_empty(&self) -> bool {
        match self {
            AggregatedResult::Listing(r) => r.cameras.is_empty(),
            AggregatedResult::Status(r) => r.camera.is_none(),
            AggregatedResult::Performance(r) => r.cameras.is_empty(),
            AggregatedResult::Comparison(r) => r.rows.is_empty(),
            AggregatedResult::Search(r) => r.available_weeks.is_empty(),
            AggregatedResult::Monthly(r) => r.available_weeks.is_empty(),
        }
    }
}
