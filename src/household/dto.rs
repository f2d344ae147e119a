use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateHouseholdRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinHouseholdRequest {
    pub invite_code: String,
}
