use async_trait::async_trait;
use tracing::info;

use crate::app::ports::Notifier;
use crate::config::RelayConfig;
use crate::error::{RelayError, Result};

/// Sends outcome emails through the Mailgun HTTP API.
pub struct MailgunNotifier {
    api_key: String,
    domain: String,
    from: String,
}

impl MailgunNotifier {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            api_key: config.mailgun_api_key.clone(),
            domain: config.mailgun_domain.clone(),
            from: config.email_from.clone(),
        }
    }
}

#[async_trait]
impl Notifier for MailgunNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        let endpoint = format!("https://api.mailgun.net/v3/{}/messages", self.domain);
        let params = [
            ("from", self.from.as_str()),
            ("to", recipient),
            ("subject", subject),
            ("text", body),
        ];
        let resp = reqwest::Client::new()
            .post(&endpoint)
            .basic_auth("api", Some(&self.api_key))
            .form(&params)
            .send()
            .await
            .map_err(|e| RelayError::Notify(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Notify(format!(
                "mailgun responded with {}: {}",
                status, body
            )));
        }
        info!(%recipient, %subject, "outcome email sent");
        Ok(())
    }
}
