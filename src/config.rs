use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding the JSON blob files, one per storage key.
    pub data_dir: PathBuf,
    /// Base URL of the zero-install web voting page.
    pub web_vote_host: String,
    /// Custom URL scheme for the legacy app-to-app deep link.
    pub deep_link_scheme: String,
    /// When set, web ballots are also folded into the household plan tally
    /// instead of living only in the web store.
    pub fold_web_votes: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let web_vote_host = std::env::var("WEB_VOTE_HOST")
            .unwrap_or_else(|_| "https://vote.mealswipe.app".into());
        let deep_link_scheme =
            std::env::var("DEEP_LINK_SCHEME").unwrap_or_else(|_| "mealswipe".into());
        let fold_web_votes = std::env::var("WEB_VOTE_FOLD")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Ok(Self {
            data_dir,
            web_vote_host,
            deep_link_scheme,
            fold_web_votes,
        })
    }
}
