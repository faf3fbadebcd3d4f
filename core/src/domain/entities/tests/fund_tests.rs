//! Unit tests for market data entities

use chrono::{Datelike, NaiveDate};

use crate::domain::entities::fund::{FundDetails, FundMeta, NavPoint};

fn meta() -> FundMeta {
    FundMeta {
        scheme_code: "100123".to_string(),
        scheme_name: "Alpha Fund".to_string(),
        fund_house: Some("Alpha AMC".to_string()),
        scheme_type: None,
        scheme_category: None,
    }
}

fn point(day: u32, nav: f64) -> NavPoint {
    NavPoint {
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        nav,
    }
}

#[test]
fn test_performance_takes_latest_points_in_chronological_order() {
    let details = FundDetails {
        meta: meta(),
        nav_history: vec![point(5, 12.0), point(4, 11.0), point(3, 10.0), point(2, 9.0)],
    };

    let performance = details.performance(3);

    let days: Vec<u32> = performance.points.iter().map(|p| p.date.day()).collect();
    assert_eq!(days, vec![3, 4, 5]);

    let summary = performance.summary.unwrap();
    assert_eq!(summary.start_nav, 10.0);
    assert_eq!(summary.end_nav, 12.0);
    assert!((summary.change - 2.0).abs() < 1e-9);
    assert!((summary.change_percent.unwrap() - 20.0).abs() < 1e-9);
}

#[test]
fn test_performance_with_short_history() {
    let details = FundDetails {
        meta: meta(),
        nav_history: vec![point(2, 10.5)],
    };

    let performance = details.performance(30);
    assert_eq!(performance.points.len(), 1);

    let summary = performance.summary.unwrap();
    assert_eq!(summary.start_date, summary.end_date);
    assert_eq!(summary.change, 0.0);
}

#[test]
fn test_performance_without_history_has_no_summary() {
    let details = FundDetails {
        meta: meta(),
        nav_history: vec![],
    };

    let performance = details.performance(30);
    assert!(performance.points.is_empty());
    assert!(performance.summary.is_none());
    assert!(details.latest_nav().is_none());
}

#[test]
fn test_zero_start_nav_has_no_percentage() {
    let details = FundDetails {
        meta: meta(),
        nav_history: vec![point(2, 1.0), point(1, 0.0)],
    };

    let summary = details.performance(30).summary.unwrap();
    assert_eq!(summary.change, 1.0);
    assert!(summary.change_percent.is_none());
}
