// Tool surface: validate arguments, fetch the weeks a request needs, aggregate, render

mod args;
mod schema;

pub use args::ToolRequest;
pub use schema::{ToolAnnotations, ToolDefinition, definition, definitions};

use serde_json::{Value, json};
use std::fmt;
use tracing::instrument;

use crate::aggregation::{
    AggregateOptions, CompareOptions, MonthlyOptions, analyze_performance, camera_status,
    compare_cameras, list_cameras, monthly_report, search_infractions,
};
use crate::error::ToolError;
use crate::fetcher::SnapshotFetcher;
use crate::models::{AggregatedResult, Scope};
use crate::render::{ResponseFormat, render};
use crate::version::{SERVICE, VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    ListCameras,
    GetCameraStatus,
    AnalyzeCameraPerformance,
    CompareCameras,
    SearchInfractions,
    GetMonthlyReport,
    HealthCheck,
}

impl ToolName {
    pub const ALL: [ToolName; 7] = [
        ToolName::ListCameras,
        ToolName::GetCameraStatus,
        ToolName::AnalyzeCameraPerformance,
        ToolName::CompareCameras,
        ToolName::SearchInfractions,
        ToolName::GetMonthlyReport,
        ToolName::HealthCheck,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::ListCameras => "list_cameras",
            ToolName::GetCameraStatus => "get_camera_status",
            ToolName::AnalyzeCameraPerformance => "analyze_camera_performance",
            ToolName::CompareCameras => "compare_cameras",
            ToolName::SearchInfractions => "search_infractions",
            ToolName::GetMonthlyReport => "get_monthly_report",
            ToolName::HealthCheck => "health_check",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executes tool calls. Holds no per-request state; every call fetches what it needs.
pub struct ToolService {
    fetcher: SnapshotFetcher,
    monthly: MonthlyOptions,
}

impl ToolService {
    pub fn new(fetcher: SnapshotFetcher, monthly: MonthlyOptions) -> Self {
        Self { fetcher, monthly }
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        definitions()
    }

    /// Run a tool by name. Unknown names and invalid arguments fail before any fetch.
    #[instrument(skip_all, fields(tool = %name))]
    pub async fn call(&self, name: &str, args: Value) -> Result<String, ToolError> {
        let tool = ToolName::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let request = ToolRequest::parse(tool, args)?;
        self.execute(request).await
    }

    pub async fn execute(&self, request: ToolRequest) -> Result<String, ToolError> {
        let (result, format) = match request {
            ToolRequest::HealthCheck => return Ok(format!("{:#}", self.health())),
            ToolRequest::ListCameras {
                month,
                week,
                format,
            } => {
                let options = AggregateOptions::new(Scope::from_week(week));
                let corpus = self.fetcher.fetch_scope(month, options.scope).await;
                (
                    AggregatedResult::Listing(list_cameras(&corpus, month, &options)),
                    format,
                )
            }
            ToolRequest::CameraStatus {
                month,
                week,
                camera_id,
                include_daily,
                format,
            } => {
                let corpus = self.fetcher.fetch_scope(month, Scope::Week(week)).await;
                (
                    AggregatedResult::Status(camera_status(
                        &corpus,
                        month,
                        week,
                        camera_id,
                        include_daily,
                    )),
                    format,
                )
            }
            ToolRequest::AnalyzePerformance {
                month,
                week,
                camera_id,
                format,
            } => {
                let options = scoped(week, camera_id);
                let corpus = self.fetcher.fetch_scope(month, options.scope).await;
                (
                    AggregatedResult::Performance(analyze_performance(&corpus, month, &options)),
                    format,
                )
            }
            ToolRequest::CompareCameras {
                month,
                week,
                metric,
                limit,
                format,
            } => {
                let options = AggregateOptions::new(Scope::from_week(week));
                let corpus = self.fetcher.fetch_scope(month, options.scope).await;
                (
                    AggregatedResult::Comparison(compare_cameras(
                        &corpus,
                        month,
                        &options,
                        CompareOptions { metric, limit },
                    )),
                    format,
                )
            }
            ToolRequest::SearchInfractions {
                month,
                week,
                camera_id,
                filter,
                format,
            } => {
                let options = scoped(week, camera_id);
                let corpus = self.fetcher.fetch_scope(month, options.scope).await;
                (
                    AggregatedResult::Search(search_infractions(&corpus, month, &options, &filter)),
                    format,
                )
            }
            ToolRequest::MonthlyReport { month, format } => {
                let corpus = self.fetcher.fetch_scope(month, Scope::Month).await;
                (
                    AggregatedResult::Monthly(monthly_report(&corpus, month, self.monthly)),
                    format,
                )
            }
        };
        if result.is_empty() {
            tracing::info!("no data for requested slice");
        }
        Ok(render_result(&result, format)?)
    }

    pub fn health(&self) -> Value {
        json!({
            "status": "healthy",
            "service": SERVICE,
            "version": VERSION,
            "timestamp": chrono::Local::now().to_rfc3339(),
            "github_token": if self.fetcher.has_token() { "configured" } else { "not configured" },
        })
    }
}

fn scoped(week: Option<crate::models::WeekNumber>, camera_id: Option<crate::models::CameraId>) -> AggregateOptions {
    let options = AggregateOptions::new(Scope::from_week(week));
    match camera_id {
        Some(id) => options.with_camera(id),
        None => options,
    }
}

fn render_result(result: &AggregatedResult, format: ResponseFormat) -> Result<String, serde_json::Error> {
    Ok(render(result, format)?.into_text())
}
