use log::{error, info, warn};

use crate::bot::Bot;
use crate::compose::frame_challenge;
use crate::discord::{execute_webhook, WebhookPayload};
use crate::error::FetchResult;

impl Bot {
    fn payload(&self, content: &str, username: String) -> WebhookPayload {
        WebhookPayload {
            content: content.to_string(),
            username: Some(username),
        }
    }

    /// Posts to the primary webhook. With `wait` the created message's id is
    /// returned when Discord sends one back.
    pub async fn send_primary(&self, content: &str, wait: bool) -> FetchResult<Option<String>> {
        let payload = self.payload(content, self.config.username.clone());

        match execute_webhook(&self.client, &self.config.webhook_url, &payload, wait).await {
            Ok(id) => {
                info!("Message sent to Discord");
                Ok(id)
            }
            Err(e) => {
                error!("Failed to send message to Discord: {}", e);
                Err(e)
            }
        }
    }

    /// Mirrors a message to the test webhook, if one is configured. The
    /// outcome never affects the primary post.
    pub async fn send_test_copy(&self, content: &str) {
        let Some(url) = &self.config.test_webhook_url else {
            return;
        };

        let payload = self.payload(content, format!("{} (test)", self.config.username));
        match execute_webhook(&self.client, url, &payload, false).await {
            Ok(_) => info!("Test copy sent"),
            Err(e) => error!("Failed to send test copy: {}", e),
        }
    }

    /// Frames and posts a challenge question, returning the new message id
    /// when it is known.
    pub async fn publish_challenge(&self, question: &str) -> Option<String> {
        let content = frame_challenge(question);
        info!("Challenge: {}", question);

        let id = self.send_primary(&content, true).await.ok().flatten();
        self.send_test_copy(&content).await;

        id
    }

    /// Pins a message in the configured channel. Returns whether it worked.
    pub async fn pin(&self, message_id: &str) -> bool {
        let (Some(api), Some(access)) = (&self.discord, &self.config.bot) else {
            info!("Bot token or channel id not set, not pinning");
            return false;
        };

        match api.pin_message(&access.channel_id, message_id).await {
            Ok(()) => {
                info!("Pinned message {}", message_id);
                true
            }
            Err(e) => {
                warn!("Failed to pin message {}: {}", message_id, e);
                false
            }
        }
    }
}
