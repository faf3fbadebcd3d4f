//! Mutual fund data as reported by the upstream market data provider.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Search hit returned by the provider's free-text search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundSummary {
    pub scheme_code: String,
    pub scheme_name: String,
}

/// Descriptive metadata for a single scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundMeta {
    pub scheme_code: String,
    pub scheme_name: String,
    pub fund_house: Option<String>,
    pub scheme_type: Option<String>,
    pub scheme_category: Option<String>,
}

/// Net asset value on a given date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: NaiveDate,
    pub nav: f64,
}

/// Metadata plus NAV history, newest point first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundDetails {
    pub meta: FundMeta,
    pub nav_history: Vec<NavPoint>,
}

/// Change in NAV across a window of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_nav: f64,
    pub end_nav: f64,
    pub change: f64,
    /// `None` when the starting NAV is zero
    pub change_percent: Option<f64>,
}

/// Chart-ready view of a fund: the most recent points in chronological order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundPerformance {
    pub meta: FundMeta,
    pub points: Vec<NavPoint>,
    pub summary: Option<PerformanceSummary>,
}

impl FundDetails {
    /// Most recent NAV point, if any
    pub fn latest_nav(&self) -> Option<&NavPoint> {
        self.nav_history.first()
    }

    /// Builds the performance view over the latest `window` points.
    ///
    /// Histories shorter than `window` use every available point.
    pub fn performance(&self, window: usize) -> FundPerformance {
        let mut points: Vec<NavPoint> = self.nav_history.iter().take(window).copied().collect();
        points.reverse();

        let summary = match (points.first(), points.last()) {
            (Some(start), Some(end)) => {
                let change = end.nav - start.nav;
                Some(PerformanceSummary {
                    start_date: start.date,
                    end_date: end.date,
                    start_nav: start.nav,
                    end_nav: end.nav,
                    change,
                    change_percent: (start.nav != 0.0).then(|| change / start.nav * 100.0),
                })
            }
            _ => None,
        };

        FundPerformance {
            meta: self.meta.clone(),
            points,
            summary,
        }
    }
}
