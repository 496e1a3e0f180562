//! Outbound delivery to the Telegram Bot API

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::TelegramConfig;
use crate::error::{RelayError, Result};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can deliver a finished notification text.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

pub struct TelegramNotifier {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| RelayError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_base, self.config.bot_token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("chat_id", self.config.chat_id.as_str()),
                ("text", text),
                ("parse_mode", "HTML"),
            ])
            .send()
            .await
            // without_url keeps the bot token out of the error text
            .map_err(|e| RelayError::DeliveryFailed(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::DeliveryFailed(format!(
                "Telegram responded with {}",
                status
            )));
        }
        debug!("Telegram accepted message ({})", status);
        Ok(())
    }
}

/// Send `text` on a detached task. At most one attempt; failures are logged
/// and never reach the webhook caller.
pub fn dispatch(notifier: Arc<dyn Notifier>, text: String) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match notifier.send(&text).await {
            Ok(()) => info!("Notification delivered"),
            Err(e) => error!("Unable to send Telegram message: {}", e),
        }
    })
}
