// Report renderer: text forms, structured form, truncation

mod common;

use cameras_mcp::aggregation::*;
use cameras_mcp::models::*;
use cameras_mcp::render::{CHARACTER_LIMIT, Report, ResponseFormat, TRUNCATION_NOTICE, render};
use common::{example_camera, record, snapshot, week};

fn text(result: &AggregatedResult) -> String {
    match render(result, ResponseFormat::Markdown).unwrap() {
        Report::Text(t) => t,
        Report::Structured(_) => panic!("expected text"),
    }
}

fn big_corpus(cameras: u32) -> MonthCorpus {
    let days: Vec<String> = (1..=28).map(|d| format!("2025-09-{:02}", d)).collect();
    let snapshots = (1..=cameras).map(|id| {
        let pairs: Vec<(&str, u64)> = days.iter().map(|d| (d.as_str(), 3)).collect();
        (id, record(&format!("Camera with a long name {}", id), &pairs, &pairs))
    });
    MonthCorpus::new().with_week(week(1), snapshots.collect())
}

#[test]
fn test_empty_listing_says_no_data() {
    let corpus = MonthCorpus::new();
    let week_scope = list_cameras(&corpus, Month::Octubre, &AggregateOptions::new(Scope::Week(week(2))));
    assert_eq!(text(&AggregatedResult::Listing(week_scope)), "No data found for week 2 of octubre");
    let month_scope = list_cameras(&corpus, Month::Octubre, &AggregateOptions::default());
    assert_eq!(text(&AggregatedResult::Listing(month_scope)), "No data found for octubre");
}

#[test]
fn test_missing_camera_message() {
    let corpus = MonthCorpus::new().with_week(week(1), snapshot(vec![(1, example_camera())]));
    let status = camera_status(&corpus, Month::Septiembre, week(1), 7, false);
    let out = text(&AggregatedResult::Status(status));
    assert!(out.contains("Camera 7 not found in week 1 of septiembre"), "{}", out);
}

#[test]
fn test_reported_total_is_labelled_apart_from_infractions() {
    let mut cam = record("Ruta 3", &[("2025-09-01", 5)], &[("2025-09-01", 40)]);
    cam.total = 99;
    let corpus = MonthCorpus::new().with_week(week(1), snapshot(vec![(1, cam)]));

    let listing = list_cameras(&corpus, Month::Septiembre, &AggregateOptions::default());
    let out = text(&AggregatedResult::Listing(listing));
    assert!(out.contains("- Week 1: 5 infractions"), "{}", out);
    assert!(out.contains("reported total 99"), "{}", out);
    assert!(!out.contains("99 infractions"), "{}", out);

    let status = camera_status(&corpus, Month::Septiembre, week(1), 1, false);
    let out = text(&AggregatedResult::Status(status));
    assert!(out.contains("**Total Infractions**: 5"), "{}", out);
    assert!(out.contains("**Reported Total**: 99"), "{}", out);
}

#[test]
fn test_performance_text_shows_ratio_and_percentage() {
    let corpus = MonthCorpus::new().with_week(week(1), snapshot(vec![(1, example_camera())]));
    let report = analyze_performance(&corpus, Month::Septiembre, &AggregateOptions::default());
    let out = text(&AggregatedResult::Performance(report));
    assert!(out.starts_with("# Performance Analysis - Septiembre"), "{}", out);
    assert!(out.contains("0.1634 (16.34%)"), "{}", out);
    assert!(out.contains("Camera 1 - Av. Belgrano"), "{}", out);
}

#[test]
fn test_comparison_table_columns() {
    let corpus = MonthCorpus::new().with_week(week(1), snapshot(vec![(1, example_camera())]));
    let report = compare_cameras(
        &corpus,
        Month::Septiembre,
        &AggregateOptions::default(),
        CompareOptions::new(Metric::Infractions),
    );
    let out = text(&AggregatedResult::Comparison(report));
    let header = out
        .lines()
        .find(|l| l.starts_with("| Camera ID"))
        .expect("table header");
    let columns: Vec<&str> = header.split('|').map(str::trim).filter(|c| !c.is_empty()).collect();
    assert_eq!(&columns[..3], &["Camera ID", "Infractions", "Rank"]);
}

#[test]
fn test_json_format_is_structured_and_unrounded() {
    let corpus = MonthCorpus::new().with_week(week(1), snapshot(vec![(1, example_camera())]));
    let report = analyze_performance(&corpus, Month::Septiembre, &AggregateOptions::default());
    let rendered = render(&AggregatedResult::Performance(report), ResponseFormat::Json).unwrap();
    let Report::Structured(value) = rendered else {
        panic!("expected structured report");
    };
    let eff = value["cameras"][0]["efficiency"].as_f64().unwrap();
    assert_eq!(eff, 50.0 / 306.0);
    assert_eq!(value["cameras"][0]["infractions"]["mean"].as_f64(), Some(25.0));
    assert_eq!(value["month"], "septiembre");
}

#[test]
fn test_large_text_is_truncated_with_notice() {
    let listing = list_cameras(&big_corpus(400), Month::Septiembre, &AggregateOptions::default());
    let result = AggregatedResult::Listing(listing);
    let out = text(&result);
    assert!(out.ends_with(TRUNCATION_NOTICE));
    let body = out.strip_suffix(TRUNCATION_NOTICE).unwrap();
    assert_eq!(body.chars().count(), CHARACTER_LIMIT);

    // structured output is never cut
    let json = render(&result, ResponseFormat::Json).unwrap().into_text();
    assert!(json.chars().count() > CHARACTER_LIMIT);
    assert!(!json.contains(TRUNCATION_NOTICE));
}

#[test]
fn test_small_text_has_no_notice() {
    let listing = list_cameras(&big_corpus(2), Month::Septiembre, &AggregateOptions::default());
    let out = text(&AggregatedResult::Listing(listing));
    assert!(out.chars().count() <= CHARACTER_LIMIT);
    assert!(!out.contains("Response truncated"));
    assert!(out.starts_with("# Cameras for Septiembre"));
}
