use reqwest::Client;
use serde::Deserialize;

use crate::error::{FetchError, FetchResult};

#[derive(Debug, Deserialize)]
pub struct CharacterList {
    #[serde(default)]
    pub results: Vec<CharacterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterEntry {
    pub name: Option<String>,
}

impl CharacterList {
    /// Non-blank character names in response order.
    pub fn names(self) -> Vec<String> {
        self.results
            .into_iter()
            .filter_map(|entry| entry.name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Fetches one page of game characters. A response without any named
/// character is [`FetchError::Empty`].
pub async fn fetch_characters(
    client: &Client,
    api_base: &str,
    api_key: &str,
) -> FetchResult<Vec<String>> {
    let res = client
        .get(format!("{}/characters/", api_base.trim_end_matches('/')))
        .query(&[("api_key", api_key), ("format", "json")])
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(FetchError::Status { status, body });
    }

    let names = serde_json::from_str::<CharacterList>(&body)?.names();
    if names.is_empty() {
        return Err(FetchError::Empty);
    }

    Ok(names)
}
