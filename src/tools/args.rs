// Tool argument parsing: raw JSON -> closed, validated requests. Nothing past this point re-validates.

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ToolError;
use crate::models::{CameraId, Metric, Month, SearchFilter, WeekNumber};
use crate::render::ResponseFormat;

use super::ToolName;

/// A tool call whose arguments passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
    ListCameras {
        month: Month,
        week: Option<WeekNumber>,
        format: ResponseFormat,
    },
    CameraStatus {
        month: Month,
        week: WeekNumber,
        camera_id: CameraId,
        include_daily: bool,
        format: ResponseFormat,
    },
    AnalyzePerformance {
        month: Month,
        week: Option<WeekNumber>,
        camera_id: Option<CameraId>,
        format: ResponseFormat,
    },
    CompareCameras {
        month: Month,
        week: Option<WeekNumber>,
        metric: Metric,
        limit: Option<usize>,
        format: ResponseFormat,
    },
    SearchInfractions {
        month: Month,
        week: Option<WeekNumber>,
        camera_id: Option<CameraId>,
        filter: SearchFilter,
        format: ResponseFormat,
    },
    MonthlyReport {
        month: Month,
        format: ResponseFormat,
    },
    HealthCheck,
}

impl ToolRequest {
    pub fn parse(name: ToolName, args: Value) -> Result<Self, ToolError> {
        let request = match name {
            ToolName::ListCameras => {
                let a: ListCamerasArgs = from_args(args)?;
                ToolRequest::ListCameras {
                    month: parse_month(a.month_number, &a.month_name)?,
                    week: a.week_number.map(parse_week).transpose()?,
                    format: a.response_format,
                }
            }
            ToolName::GetCameraStatus => {
                let a: CameraStatusArgs = from_args(args)?;
                ToolRequest::CameraStatus {
                    month: parse_month(a.month_number, &a.month_name)?,
                    week: parse_week(a.week_number)?,
                    camera_id: a.camera_id.parse()?,
                    include_daily: a.include_daily,
                    format: a.response_format,
                }
            }
            ToolName::AnalyzeCameraPerformance => {
                let a: PerformanceArgs = from_args(args)?;
                ToolRequest::AnalyzePerformance {
                    month: parse_month(a.month_number, &a.month_name)?,
                    week: a.week_number.map(parse_week).transpose()?,
                    camera_id: a.camera_id.map(CameraIdArg::parse).transpose()?,
                    format: a.response_format,
                }
            }
            ToolName::CompareCameras => {
                let a: CompareArgs = from_args(args)?;
                let limit = match a.limit {
                    Some(n) if n < 1 => {
                        return Err(ToolError::invalid(format!("limit must be >= 1, got {}", n)));
                    }
                    Some(n) => Some(n as usize),
                    None => None,
                };
                ToolRequest::CompareCameras {
                    month: parse_month(a.month_number, &a.month_name)?,
                    week: a.week_number.map(parse_week).transpose()?,
                    metric: a.metric,
                    limit,
                    format: a.response_format,
                }
            }
            ToolName::SearchInfractions => {
                let a: SearchArgs = from_args(args)?;
                let filter = a.filter()?;
                ToolRequest::SearchInfractions {
                    month: parse_month(a.month_number, &a.month_name)?,
                    week: a.week_number.map(parse_week).transpose()?,
                    camera_id: a.camera_id.map(CameraIdArg::parse).transpose()?,
                    filter,
                    format: a.response_format,
                }
            }
            ToolName::GetMonthlyReport => {
                let a: MonthlyReportArgs = from_args(args)?;
                ToolRequest::MonthlyReport {
                    month: parse_month(a.month_number, &a.month_name)?,
                    format: a.response_format,
                }
            }
            ToolName::HealthCheck => ToolRequest::HealthCheck,
        };
        Ok(request)
    }
}

/// Missing or null arguments behave like an empty object.
fn from_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| ToolError::invalid(e.to_string()))
}

fn parse_month(number: i64, name: &str) -> Result<Month, ToolError> {
    let by_number = u8::try_from(number)
        .ok()
        .and_then(Month::from_number)
        .ok_or_else(|| {
            ToolError::invalid(format!("month_number must be between 1 and 12, got {}", number))
        })?;
    let by_name = Month::from_name(name).ok_or_else(|| {
        ToolError::invalid(format!(
            "month_name must be a Spanish month name (enero ... diciembre), got {:?}",
            name
        ))
    })?;
    if by_number != by_name {
        return Err(ToolError::invalid(format!(
            "month_name {:?} does not match month_number {}",
            by_name.name(),
            number
        )));
    }
    Ok(by_number)
}

fn parse_week(week: i64) -> Result<WeekNumber, ToolError> {
    u8::try_from(week)
        .ok()
        .and_then(WeekNumber::new)
        .ok_or_else(|| {
            ToolError::invalid(format!(
                "week_number must be between {} and {}, got {}",
                WeekNumber::MIN,
                WeekNumber::MAX,
                week
            ))
        })
}

/// Camera ids arrive either as JSON numbers or numeric strings ("5").
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CameraIdArg {
    Number(i64),
    Text(String),
}

impl CameraIdArg {
    fn parse(self) -> Result<CameraId, ToolError> {
        let id = match &self {
            CameraIdArg::Number(n) => CameraId::try_from(*n).ok(),
            CameraIdArg::Text(s) => s.trim().parse::<CameraId>().ok(),
        };
        id.filter(|id| *id > 0).ok_or_else(|| {
            let shown = match self {
                CameraIdArg::Number(n) => n.to_string(),
                CameraIdArg::Text(s) => format!("{:?}", s),
            };
            ToolError::invalid(format!("camera_id must be a positive integer, got {}", shown))
        })
    }
}

#[derive(Debug, Deserialize)]
struct ListCamerasArgs {
    month_number: i64,
    month_name: String,
    #[serde(default)]
    week_number: Option<i64>,
    #[serde(default)]
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct CameraStatusArgs {
    month_number: i64,
    month_name: String,
    week_number: i64,
    camera_id: CameraIdArg,
    #[serde(default)]
    include_daily: bool,
    #[serde(default)]
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct PerformanceArgs {
    month_number: i64,
    month_name: String,
    #[serde(default)]
    week_number: Option<i64>,
    #[serde(default)]
    camera_id: Option<CameraIdArg>,
    #[serde(default)]
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct CompareArgs {
    month_number: i64,
    month_name: String,
    #[serde(default)]
    week_number: Option<i64>,
    metric: Metric,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    month_number: i64,
    month_name: String,
    #[serde(default)]
    week_number: Option<i64>,
    #[serde(default)]
    camera_id: Option<CameraIdArg>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    min_infractions: Option<i64>,
    #[serde(default)]
    max_infractions: Option<i64>,
    #[serde(default)]
    zero_infractions: bool,
    #[serde(default)]
    response_format: ResponseFormat,
}

impl SearchArgs {
    fn filter(&self) -> Result<SearchFilter, ToolError> {
        let date = self
            .date
            .as_deref()
            .map(|d| {
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .map_err(|_| {
                        ToolError::invalid(format!("date must be formatted YYYY-MM-DD, got {:?}", d))
                    })
            })
            .transpose()?;
        let min_infractions = non_negative("min_infractions", self.min_infractions)?;
        let max_infractions = non_negative("max_infractions", self.max_infractions)?;
        if let (Some(min), Some(max)) = (min_infractions, max_infractions)
            && min > max
        {
            return Err(ToolError::invalid(format!(
                "min_infractions ({}) must not exceed max_infractions ({})",
                min, max
            )));
        }
        Ok(SearchFilter {
            date,
            min_infractions,
            max_infractions,
            zero_infractions: self.zero_infractions,
        })
    }
}

fn non_negative(field: &str, value: Option<i64>) -> Result<Option<u64>, ToolError> {
    value
        .map(|v| {
            u64::try_from(v)
                .map_err(|_| ToolError::invalid(format!("{} must be >= 0, got {}", field, v)))
        })
        .transpose()
}

#[derive(Debug, Deserialize)]
struct MonthlyReportArgs {
    month_number: i64,
    month_name: String,
    #[serde(default)]
    response_format: ResponseFormat,
}
