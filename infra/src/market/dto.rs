//! Wire formats of the provider and their conversion to domain types
//!
//! Scheme codes arrive as JSON integers, dates as `dd-mm-yyyy` and NAVs as
//! decimal strings.

use chrono::NaiveDate;
use serde::Deserialize;

use fm_core::domain::entities::fund::{FundDetails, FundMeta, FundSummary, NavPoint};
use fm_core::errors::{DomainError, MarketError};

const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SchemeCodeDto {
    Number(u64),
    Text(String),
}

impl SchemeCodeDto {
    fn into_string(self) -> String {
        match self {
            SchemeCodeDto::Number(n) => n.to_string(),
            SchemeCodeDto::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchHitDto {
    pub scheme_code: SchemeCodeDto,
    pub scheme_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SchemeMetaDto {
    pub fund_house: Option<String>,
    pub scheme_type: Option<String>,
    pub scheme_category: Option<String>,
    pub scheme_code: Option<SchemeCodeDto>,
    pub scheme_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NavDto {
    pub date: String,
    pub nav: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SchemeResponseDto {
    #[serde(default)]
    pub meta: Option<SchemeMetaDto>,
    #[serde(default)]
    pub data: Vec<NavDto>,
}

pub(crate) fn into_summaries(hits: Vec<SearchHitDto>) -> Vec<FundSummary> {
    hits.into_iter()
        .map(|hit| FundSummary {
            scheme_code: hit.scheme_code.into_string(),
            scheme_name: hit.scheme_name,
        })
        .collect()
}

/// Parses one NAV entry; `None` when either field is unusable
pub(crate) fn parse_nav_point(dto: &NavDto) -> Option<NavPoint> {
    let date = NaiveDate::parse_from_str(dto.date.trim(), DATE_FORMAT).ok()?;
    let nav = dto.nav.trim().parse::<f64>().ok().filter(|n| n.is_finite())?;
    Some(NavPoint { date, nav })
}

/// Converts a scheme response into domain details, NAV history newest first
///
/// Missing metadata or an empty usable history means the provider does not
/// know the scheme.
pub(crate) fn into_details(
    requested_code: &str,
    response: SchemeResponseDto,
) -> Result<FundDetails, DomainError> {
    let not_found = || -> DomainError {
        MarketError::FundNotFound {
            scheme_code: requested_code.to_string(),
        }
        .into()
    };

    let meta = response.meta.ok_or_else(not_found)?;

    let mut nav_history: Vec<NavPoint> = response.data.iter().filter_map(parse_nav_point).collect();
    if nav_history.len() < response.data.len() {
        tracing::warn!(
            scheme_code = requested_code,
            skipped = response.data.len() - nav_history.len(),
            "Skipped unparsable NAV entries"
        );
    }
    if nav_history.is_empty() {
        return Err(not_found());
    }
    nav_history.sort_by(|a, b| b.date.cmp(&a.date));

    let scheme_code = meta
        .scheme_code
        .map(SchemeCodeDto::into_string)
        .unwrap_or_else(|| requested_code.to_string());

    Ok(FundDetails {
        meta: FundMeta {
            scheme_code,
            scheme_name: meta.scheme_name.unwrap_or_default(),
            fund_house: meta.fund_house,
            scheme_type: meta.scheme_type,
            scheme_category: meta.scheme_category,
        },
        nav_history,
    })
}
