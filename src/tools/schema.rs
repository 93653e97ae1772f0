// Tool catalogue published by tools/list: names, descriptions, JSON Schemas, hints

use serde::Serialize;
use serde_json::{Value, json};

use super::ToolName;
use crate::models::Month;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    pub annotations: ToolAnnotations,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    pub title: &'static str,
    pub read_only_hint: bool,
    pub destructive_hint: bool,
    pub idempotent_hint: bool,
    pub open_world_hint: bool,
}

impl ToolAnnotations {
    fn read_only(title: &'static str, open_world: bool) -> Self {
        Self {
            title,
            read_only_hint: true,
            destructive_hint: false,
            idempotent_hint: true,
            open_world_hint: open_world,
        }
    }
}

pub fn definitions() -> Vec<ToolDefinition> {
    ToolName::ALL.into_iter().map(definition).collect()
}

pub fn definition(name: ToolName) -> ToolDefinition {
    let (title, description, input_schema) = match name {
        ToolName::ListCameras => (
            "List Available Cameras",
            "List cameras with their weekly infraction totals, storage and uptime for a month or a single week.",
            object(
                &["month_number", "month_name"],
                json!({
                    "month_number": month_number(),
                    "month_name": month_name(),
                    "week_number": week_number("Week number (1-5). Omit to cover every week of the month."),
                    "response_format": response_format(),
                }),
            ),
        ),
        ToolName::GetCameraStatus => (
            "Get Camera Status",
            "Detailed status of one camera in one week: uptime, storage, totals and optional daily breakdown.",
            object(
                &["month_number", "month_name", "week_number", "camera_id"],
                json!({
                    "month_number": month_number(),
                    "month_name": month_name(),
                    "week_number": week_number("Week number (1-5)."),
                    "camera_id": camera_id("Camera ID (e.g. '1', '5')."),
                    "include_daily": {
                        "type": "boolean",
                        "default": false,
                        "description": "Include the daily breakdown of infractions and frames."
                    },
                    "response_format": response_format(),
                }),
            ),
        ),
        ToolName::AnalyzeCameraPerformance => (
            "Analyze Camera Performance",
            "Per-day infraction and frame statistics (mean, median, min, max, total) and efficiency per camera.",
            object(
                &["month_number", "month_name"],
                json!({
                    "month_number": month_number(),
                    "month_name": month_name(),
                    "week_number": week_number("Specific week (1-5). Omit to analyze every week."),
                    "camera_id": camera_id("Specific camera ID. Omit to analyze every camera."),
                    "response_format": response_format(),
                }),
            ),
        ),
        ToolName::CompareCameras => (
            "Compare Cameras",
            "Rank cameras by infractions, frames or efficiency (infractions per frame), highest first.",
            object(
                &["month_number", "month_name", "metric"],
                json!({
                    "month_number": month_number(),
                    "month_name": month_name(),
                    "week_number": week_number("Specific week (1-5). Omit to compare over the whole month."),
                    "metric": {
                        "type": "string",
                        "enum": ["infractions", "frames", "efficiency"],
                        "description": "Metric to rank by. Efficiency is infractions divided by frames."
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "description": "Keep only the top N cameras."
                    },
                    "response_format": response_format(),
                }),
            ),
        ),
        ToolName::SearchInfractions => (
            "Search Infractions",
            "Find per-day camera entries by date or infraction thresholds, grouped by date.",
            object(
                &["month_number", "month_name"],
                json!({
                    "month_number": month_number(),
                    "month_name": month_name(),
                    "week_number": week_number("Specific week (1-5). Omit to search the whole month."),
                    "camera_id": camera_id("Restrict the search to one camera."),
                    "date": {
                        "type": "string",
                        "format": "date",
                        "description": "Specific date (YYYY-MM-DD)."
                    },
                    "min_infractions": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Minimum number of infractions (inclusive)."
                    },
                    "max_infractions": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Maximum number of infractions (inclusive)."
                    },
                    "zero_infractions": {
                        "type": "boolean",
                        "default": false,
                        "description": "Only days that recorded zero infractions."
                    },
                    "response_format": response_format(),
                }),
            ),
        ),
        ToolName::GetMonthlyReport => (
            "Get Monthly Report",
            "Month-wide totals, weekly breakdown, top cameras by infractions and recent daily trend.",
            object(
                &["month_number", "month_name"],
                json!({
                    "month_number": month_number(),
                    "month_name": month_name(),
                    "response_format": response_format(),
                }),
            ),
        ),
        ToolName::HealthCheck => (
            "Health Check",
            "Service status, version and whether an upstream access token is configured.",
            object(&[], json!({})),
        ),
    };
    ToolDefinition {
        name: name.as_str(),
        title,
        description,
        input_schema,
        annotations: ToolAnnotations::read_only(title, name != ToolName::HealthCheck),
    }
}

fn object(required: &[&str], properties: Value) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn month_number() -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "maximum": 12,
        "description": "Month number (1-12)."
    })
}

fn month_name() -> Value {
    let names: Vec<&str> = Month::ALL.iter().map(|m| m.name()).collect();
    json!({
        "type": "string",
        "enum": names,
        "description": "Month name in Spanish, matching month_number (e.g. 'enero', 'octubre')."
    })
}

fn week_number(description: &str) -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "maximum": 5,
        "description": description
    })
}

fn camera_id(description: &str) -> Value {
    json!({
        "type": ["string", "integer"],
        "description": description
    })
}

fn response_format() -> Value {
    json!({
        "type": "string",
        "enum": ["markdown", "json"],
        "default": "markdown",
        "description": "Output format: human-readable markdown or structured JSON."
    })
}
