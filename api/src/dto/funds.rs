use fm_core::domain::entities::user::SavedFund;
use fm_core::services::funds::SaveFundInput;
use serde::{Deserialize, Deserializer, Serialize};

/// Save request. `schemeCode` may arrive as a JSON string or integer.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFundRequest {
    #[serde(default, deserialize_with = "scheme_code_from_string_or_number")]
    pub scheme_code: Option<String>,
    #[serde(default)]
    pub scheme_name: Option<String>,
    #[serde(default)]
    pub fund_house: Option<String>,
    #[serde(default)]
    pub scheme_category: Option<String>,
}

impl From<SaveFundRequest> for SaveFundInput {
    fn from(request: SaveFundRequest) -> Self {
        SaveFundInput {
            scheme_code: request.scheme_code.unwrap_or_default(),
            scheme_name: request.scheme_name.unwrap_or_default(),
            fund_house: request.fund_house,
            scheme_category: request.scheme_category,
        }
    }
}

fn scheme_code_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Code>::deserialize(deserializer)?.map(|code| match code {
        Code::Text(text) => text,
        Code::Number(number) => number.to_string(),
    }))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFundResponse {
    pub scheme_code: String,
    pub scheme_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_house: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_category: Option<String>,
    pub message: String,
}

impl From<SavedFund> for SaveFundResponse {
    fn from(fund: SavedFund) -> Self {
        Self {
            scheme_code: fund.scheme_code,
            scheme_name: fund.scheme_name,
            fund_house: fund.fund_house,
            scheme_category: fund.scheme_category,
            message: "Fund saved successfully".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFundResponse {
    pub scheme_code: String,
    pub message: String,
}

impl RemoveFundResponse {
    pub fn new(scheme_code: String) -> Self {
        Self {
            scheme_code,
            message: "Fund removed successfully".to_string(),
        }
    }
}
