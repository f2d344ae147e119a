use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ShareLinkQuery {
    /// Display name shown to web voters; defaults to the cook's member name.
    pub from: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub url: String,
}
