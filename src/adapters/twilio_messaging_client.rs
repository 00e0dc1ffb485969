use crate::domain::messaging_notifier::MessagingNotifier;
use anyhow::Context;
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

/// Twilio REST client for the chat notification channel.
#[derive(Clone)]
pub struct TwilioMessagingClient {
    http_client: reqwest::Client,
    base_url: String,
    account_sid: String,
    auth_token: Secret<String>,
    sender: String,
    recipient: String,
}

impl TwilioMessagingClient {
    pub fn new(
        base_url: String,
        account_sid: String,
        auth_token: Secret<String>,
        sender: String,
        recipient: String,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = reqwest::Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            account_sid,
            auth_token,
            sender,
            recipient,
        }
    }
}

#[async_trait]
impl MessagingNotifier for TwilioMessagingClient {
    #[tracing::instrument(name = "Sending a chat notification", skip(self, body))]
    async fn send(&self, body: &str) -> Result<(), anyhow::Error> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );

        self.http_client
            .post(&url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&[
                ("From", self.sender.as_str()),
                ("To", self.recipient.as_str()),
                ("Body", body),
            ])
            .send()
            .await
            .context("Failed to reach the messaging provider")?
            .error_for_status()
            .context("The messaging provider rejected the notification")?;

        Ok(())
    }
}
