// Report renderer: structured JSON or bounded markdown text

mod text;

use serde::{Deserialize, Serialize};

use crate::models::AggregatedResult;

/// Hard ceiling for rendered text, in characters.
pub const CHARACTER_LIMIT: usize = 25_000;

/// Appended after the first CHARACTER_LIMIT characters when text was cut.
pub const TRUNCATION_NOTICE: &str =
    "\n\n... [Response truncated due to size. Use filters to narrow results.]";

/// Caller-selected output format; "markdown" is the text form, "json" the structured one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Structured(serde_json::Value),
    Text(String),
}

impl Report {
    /// Body handed back to the tool caller; structured reports are pretty-printed JSON.
    pub fn into_text(self) -> String {
        match self {
            Report::Structured(value) => format!("{:#}", value),
            Report::Text(text) => text,
        }
    }
}

/// Render an aggregation result. Text is truncated after rendering; structured output never is.
pub fn render(result: &AggregatedResult, format: ResponseFormat) -> Result<Report, serde_json::Error> {
    match format {
        ResponseFormat::Json => Ok(Report::Structured(serde_json::to_value(result)?)),
        ResponseFormat::Markdown => Ok(Report::Text(truncate(
            text::render_text(result),
            CHARACTER_LIMIT,
        ))),
    }
}

/// Keep the first `limit` characters and append [`TRUNCATION_NOTICE`]; shorter text is returned as-is.
pub fn truncate(mut text: String, limit: usize) -> String {
    if let Some((cut, _)) = text.char_indices().nth(limit) {
        text.truncate(cut);
        text.push_str(TRUNCATION_NOTICE);
    }
    text
}
