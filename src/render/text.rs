// Markdown text rendering, one function per aggregation mode

use crate::models::{
    AggregatedResult, CameraListing, CameraStatus, ComparisonReport, Metric, MonthlyReport,
    PerformanceReport, Scope, SearchReport, Statistics, WeekNumber,
};

pub(super) fn render_text(result: &AggregatedResult) -> String {
    let lines = match result {
        AggregatedResult::Listing(r) => listing(r),
        AggregatedResult::Status(r) => status(r),
        AggregatedResult::Performance(r) => performance(r),
        AggregatedResult::Comparison(r) => comparison(r),
        AggregatedResult::Search(r) => search(r),
        AggregatedResult::Monthly(r) => monthly(r),
    };
    lines.join("\n")
}

fn no_data(scope: Scope, month: &str) -> Vec<String> {
    match scope {
        Scope::Week(w) => vec![format!("No data found for week {} of {}", w, month)],
        Scope::Month => vec![format!("No data found for {}", month)],
    }
}

fn scope_header(scope: Scope, available: &[WeekNumber]) -> String {
    match scope {
        Scope::Week(w) => format!("## Week {}", w),
        Scope::Month => format!("## Weeks Analyzed: {}", join_weeks(available)),
    }
}

fn join_weeks(weeks: &[WeekNumber]) -> String {
    weeks
        .iter()
        .map(WeekNumber::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ratio with four decimals plus the same value as a percentage.
fn ratio(value: f64) -> String {
    format!("{:.4} ({:.2}%)", value, value * 100.0)
}

/// 1234567 -> "1,234,567".
fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn optional_count(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn stats_lines(label: &str, stats: &Statistics) -> Vec<String> {
    vec![
        format!("- **{}** ({} days):", label, stats.count),
        format!("  - Total: {}", stats.total),
        format!("  - Mean: {:.2}", stats.mean),
        format!("  - Median: {:.2}", stats.median),
        format!("  - Min: {}", stats.min),
        format!("  - Max: {}", stats.max),
    ]
}

fn listing(r: &CameraListing) -> Vec<String> {
    if r.cameras.is_empty() {
        return no_data(r.scope, r.month.name());
    }
    let mut lines = vec![
        format!("# Cameras for {}", r.month.title()),
        match r.scope {
            Scope::Week(w) => format!("## Week {}", w),
            Scope::Month => format!("## Available Weeks: {}", join_weeks(&r.available_weeks)),
        },
        format!("\nTotal cameras found: {}\n", r.count),
    ];
    for camera in &r.cameras {
        lines.push(format!("### Camera {} - {}", camera.camera_id, camera.name));
        for week in &camera.weeks {
            lines.push(format!(
                "- Week {}: {} infractions, {} frames, reported total {}, Storage: {}",
                week.week, week.infractions, week.frames, week.reported_total, week.used_storage
            ));
        }
        lines.push(format!(
            "- Totals: {} infractions, {} frames, reported total {}, Efficiency: {}",
            camera.infractions_total,
            camera.frames_total,
            camera.reported_total,
            ratio(camera.efficiency)
        ));
        if !camera.uptime.is_empty() {
            lines.push(format!("- Uptime: {}", camera.uptime));
        }
    }
    lines
}

fn status(r: &CameraStatus) -> Vec<String> {
    let Some(camera) = &r.camera else {
        return if r.week_available {
            vec![format!(
                "Camera {} not found in week {} of {}",
                r.camera_id, r.week, r.month
            )]
        } else {
            no_data(Scope::Week(r.week), r.month.name())
        };
    };
    let mut lines = vec![
        format!("## Camera {} - {}", r.camera_id, camera.name),
        format!("- **Week**: {} of {}", r.week, r.month.title()),
        format!("- **Uptime**: {}", camera.uptime),
        format!("- **Storage Used**: {}", camera.used_storage),
        format!("- **Total Infractions**: {}", camera.infractions_total),
        format!("- **Reported Total**: {}", camera.reported_total),
        format!("- **Total Frames**: {}", camera.frames_total),
        format!("- **Efficiency**: {}", ratio(camera.efficiency)),
    ];
    if let Some(daily) = &camera.daily {
        lines.push("\n### Daily Breakdown".to_string());
        lines.push("| Date | Infractions | Frames |".to_string());
        lines.push("|------|-------------|--------|".to_string());
        for day in daily {
            lines.push(format!(
                "| {} | {} | {} |",
                day.date,
                optional_count(day.infractions),
                optional_count(day.frames)
            ));
        }
    }
    lines
}

fn performance(r: &PerformanceReport) -> Vec<String> {
    if r.cameras.is_empty() {
        return no_data(r.scope, r.month.name());
    }
    let mut lines = vec![
        format!("# Performance Analysis - {}", r.month.title()),
        scope_header(r.scope, &r.available_weeks),
    ];
    for camera in &r.cameras {
        lines.push(format!("\n### Camera {} - {}", camera.camera_id, camera.name));
        lines.push(format!(
            "- **Weeks Analyzed**: {} ({})",
            camera.weeks.len(),
            join_weeks(&camera.weeks)
        ));
        lines.extend(stats_lines("Daily Infractions", &camera.infractions));
        lines.extend(stats_lines("Daily Frames", &camera.frames));
        lines.push(format!("- **Efficiency**: {}", ratio(camera.efficiency)));
    }
    lines
}

fn comparison(r: &ComparisonReport) -> Vec<String> {
    if r.rows.is_empty() {
        return no_data(r.scope, r.month.name());
    }
    let title = r.metric.title();
    let mut lines = vec![
        format!("# Camera Comparison - {}", r.month.title()),
        scope_header(r.scope, &r.available_weeks),
        format!("## Metric: {}", title),
        format!(
            "\n| Camera ID | {} | Rank | Name | Infractions | Frames | Efficiency | Storage |",
            title
        ),
        format!(
            "|-----------|{}|------|------|-------------|--------|------------|---------|",
            "-".repeat(title.len() + 2)
        ),
    ];
    for row in &r.rows {
        let metric = match r.metric {
            Metric::Efficiency => format!("{:.4}", row.metric_value),
            Metric::Infractions | Metric::Frames => format!("{}", row.metric_value),
        };
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} | {:.2}% | {} |",
            row.camera_id,
            metric,
            row.rank,
            row.name,
            row.infractions,
            row.frames,
            row.efficiency * 100.0,
            row.used_storage
        ));
    }
    lines
}

fn search(r: &SearchReport) -> Vec<String> {
    if r.available_weeks.is_empty() {
        return no_data(r.scope, r.month.name());
    }
    let mut lines = vec![format!("# Infraction Search Results - {}", r.month.title())];

    let mut filters = Vec::new();
    if let Scope::Week(w) = r.scope {
        filters.push(format!("Week: {}", w));
    }
    if let Some(date) = &r.filter.date {
        filters.push(format!("Date: {}", date));
    }
    if let Some(min) = r.filter.min_infractions {
        filters.push(format!("Min: {}", min));
    }
    if let Some(max) = r.filter.max_infractions {
        filters.push(format!("Max: {}", max));
    }
    if r.filter.zero_infractions {
        filters.push("Zero infractions".to_string());
    }
    if !filters.is_empty() {
        lines.push(format!("## Filters: {}", filters.join(", ")));
    }

    lines.push(format!("\nFound {} matching records\n", r.count));
    if r.groups.is_empty() {
        lines.push("No matches found".to_string());
        return lines;
    }
    for group in &r.groups {
        lines.push(format!("\n### {}", group.date));
        for m in &group.matches {
            let frames = m
                .frames
                .map_or_else(|| "no frame data".to_string(), |f| format!("{} frames", f));
            lines.push(format!(
                "- **{}** (ID: {}, Week {}): {} infractions, {}",
                m.camera_name, m.camera_id, m.week, m.infractions, frames
            ));
        }
    }
    lines
}

fn monthly(r: &MonthlyReport) -> Vec<String> {
    if r.available_weeks.is_empty() {
        return no_data(Scope::Month, r.month.name());
    }
    // Year comes from the data itself: the newest date seen this month.
    let year = r
        .recent_days
        .last()
        .and_then(|d| d.date.get(..4))
        .map(|y| format!(" {}", y))
        .unwrap_or_default();

    let mut lines = vec![
        format!("# Monthly Report - {}{}", r.month.title(), year),
        "\n## Executive Summary".to_string(),
        format!(
            "- **Total Infractions**: {}",
            thousands(r.summary.infractions_total)
        ),
        format!("- **Total Frames**: {}", thousands(r.summary.frames_total)),
        format!("- **Overall Efficiency**: {}", ratio(r.summary.efficiency)),
        format!(
            "- **Weeks Analyzed**: {} ({})",
            r.summary.weeks_available,
            join_weeks(&r.available_weeks)
        ),
        format!("- **Active Cameras**: {}", r.summary.cameras_active),
        "\n## Weekly Breakdown".to_string(),
    ];
    for week in &r.weekly_trend {
        lines.push(format!(
            "- **Week {}**: {} infractions, {} frames (Efficiency: {})",
            week.week,
            week.infractions,
            week.frames,
            ratio(week.efficiency)
        ));
    }

    lines.push("\n## Top Cameras by Infractions".to_string());
    for row in &r.top_cameras {
        lines.push(format!(
            "{}. **{}** (ID: {}): {} infractions, {} frames, Efficiency: {}",
            row.rank,
            row.name,
            row.camera_id,
            row.infractions,
            row.frames,
            ratio(row.efficiency)
        ));
    }

    if !r.recent_days.is_empty() {
        lines.push(format!(
            "\n## Recent Daily Trends (Last {} Days with Data)",
            r.recent_days.len()
        ));
        for day in &r.recent_days {
            lines.push(format!(
                "- **{}**: {} infractions, {} frames",
                day.date, day.infractions, day.frames
            ));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn ratio_shows_percentage() {
        assert_eq!(ratio(50.0 / 306.0), "0.1634 (16.34%)");
        assert_eq!(ratio(0.0), "0.0000 (0.00%)");
    }
}
