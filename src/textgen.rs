use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::constants::USER_AGENT;
use crate::error::{FetchError, FetchResult};

#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    pub inputs: String,
}

#[derive(Debug, Deserialize)]
pub struct Generation {
    pub generated_text: Option<String>,
}

pub fn build_json_client(api_key: &str) -> FetchResult<Client> {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        AUTHORIZATION,
        format!("Bearer {api_key}")
            .parse()
            .map_err(|_| FetchError::InvalidRequest("api key is not a valid header value".into()))?,
    );

    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?)
}

pub fn prompt(category: Category, subjects: &[String]) -> String {
    format!(
        "Generate a funny LGBTQ+ question about a {}: {}.",
        category.name().replace('_', " "),
        subjects.join(" and ")
    )
}

/// Text-generation client for the question writer.
pub struct TextGenerator {
    client: Client,
    url: String,
}

impl TextGenerator {
    pub fn new(api_key: &str, url: &str) -> FetchResult<Self> {
        Ok(Self {
            client: build_json_client(api_key)?,
            url: url.to_string(),
        })
    }

    pub async fn generate(&self, prompt: &str) -> FetchResult<String> {
        let res = self
            .client
            .post(&self.url)
            .json(&GenerationRequest {
                inputs: prompt.to_string(),
            })
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        let generations: Vec<Generation> = serde_json::from_str(&body)?;
        generations
            .into_iter()
            .next()
            .and_then(|g| g.generated_text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(FetchError::Empty)
    }

    /// A generated question, accepted only if it names every subject.
    pub async fn question(&self, category: Category, subjects: &[String]) -> FetchResult<String> {
        let text = self.generate(&prompt(category, subjects)).await?;

        if subjects.iter().all(|subject| text.contains(subject.as_str())) {
            Ok(text)
        } else {
            Err(FetchError::Empty)
        }
    }
}
