// Domain models: upstream camera documents, calendar identifiers, aggregation outputs

mod calendar;
mod camera;
mod report;

pub use calendar::{Month, Scope, WeekNumber};
pub use camera::{CameraId, CameraRecord, DailyCounts, MonthCorpus, WeeklySnapshot};
pub use report::{
    AggregatedResult, CameraDetail, CameraListing, CameraPerformance, CameraStatus,
    CameraSummary, ComparisonReport, ComparisonRow, DailyEntry, DateGroup, DayTrend, Metric,
    MonthSummary, MonthlyReport, PerformanceReport, SearchFilter, SearchMatch, SearchReport,
    Statistics, WeekPresence, WeekTrend,
};
