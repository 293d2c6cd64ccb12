//! The handful of Discord REST calls a challenge run needs: webhook
//! execution, pinning, and reading back reactions.

use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::FETCH_LIMIT;
use crate::error::{FetchError, FetchResult};

#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    #[serde(default)]
    pub bot: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Emoji {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reaction {
    pub count: u32,
    pub emoji: Emoji,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageReference {
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelMessage {
    pub author: DiscordUser,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    pub message_reference: Option<MessageReference>,
}

impl ChannelMessage {
    pub fn replies_to(&self, message_id: &str) -> bool {
        self.message_reference
            .as_ref()
            .and_then(|r| r.message_id.as_deref())
            == Some(message_id)
    }

    pub fn reaction_count(&self, emoji: &str) -> u32 {
        self.reactions
            .iter()
            .filter(|r| r.emoji.name.as_deref().is_some_and(|name| same_emoji(name, emoji)))
            .map(|r| r.count)
            .sum()
    }
}

/// Compares emoji ignoring variation selectors, which clients add and drop
/// inconsistently.
pub fn same_emoji(a: &str, b: &str) -> bool {
    let strip = |s: &str| s.chars().filter(|c| *c != '\u{fe0f}').collect::<String>();
    strip(a) == strip(b)
}

#[derive(Debug, Deserialize)]
struct CreatedMessage {
    id: String,
}

/// The created message's id, when a successful webhook response carries a
/// message object. Empty bodies (204, or 200 without `wait`) yield `None`.
pub fn message_id_from(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<CreatedMessage>(body) {
        Ok(message) => Some(message.id),
        Err(e) => {
            debug!("Webhook response has no message id: {}", e);
            None
        }
    }
}

/// Posts `payload` to a webhook. With `wait` Discord answers with the created
/// message, which is the only way to learn its id.
pub async fn execute_webhook(
    client: &Client,
    url: &str,
    payload: &WebhookPayload,
    wait: bool,
) -> FetchResult<Option<String>> {
    let mut req = client.post(url).json(payload);
    if wait {
        req = req.query(&[("wait", "true")]);
    }

    let res = req.send().await?;
    let status = res.status();
    let body = res.text().await?;

    match status {
        StatusCode::OK | StatusCode::NO_CONTENT => Ok(message_id_from(&body)),
        _ => Err(FetchError::Status { status, body }),
    }
}

/// Bot-authenticated access to the channel REST endpoints.
pub struct DiscordApi {
    client: Client,
    base: String,
    token: String,
}

impl DiscordApi {
    pub fn new(client: Client, base: &str, token: &str) -> Self {
        Self {
            client,
            base: base.to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self, segments: &[&str]) -> FetchResult<Url> {
        let mut url = Url::parse(&self.base).map_err(|e| FetchError::InvalidRequest(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidRequest(format!("{} cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn auth(&self) -> String {
        format!("Bot {}", self.token)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> FetchResult<T> {
        let res = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.auth())
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn pin_message(&self, channel_id: &str, message_id: &str) -> FetchResult<()> {
        let url = self.url(&["channels", channel_id, "pins", message_id])?;
        let res = self
            .client
            .put(url)
            .header(AUTHORIZATION, self.auth())
            .header(CONTENT_LENGTH, "0")
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::NO_CONTENT {
            let body = res.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        Ok(())
    }

    pub async fn get_message(&self, channel_id: &str, message_id: &str) -> FetchResult<ChannelMessage> {
        let url = self.url(&["channels", channel_id, "messages", message_id])?;
        self.get_json(url).await
    }

    /// Users who reacted to a message with `emoji`.
    pub async fn get_reaction_users(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> FetchResult<Vec<DiscordUser>> {
        let mut url = self.url(&["channels", channel_id, "messages", message_id, "reactions", emoji])?;
        url.query_pairs_mut()
            .append_pair("limit", &FETCH_LIMIT.to_string());
        self.get_json(url).await
    }

    /// A window of channel messages posted after `message_id`.
    pub async fn get_messages_after(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> FetchResult<Vec<ChannelMessage>> {
        let mut url = self.url(&["channels", channel_id, "messages"])?;
        url.query_pairs_mut()
            .append_pair("after", message_id)
            .append_pair("limit", &FETCH_LIMIT.to_string());
        self.get_json(url).await
    }
}
