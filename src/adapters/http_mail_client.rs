use crate::domain::mail_notifier::MailNotifier;
use anyhow::Context;
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

/// HTTP mail-relay client for the email notification channel.
#[derive(Clone)]
pub struct HttpMailClient {
    http_client: reqwest::Client,
    base_url: String,
    authorization_token: Secret<String>,
    sender: String,
    recipient: String,
}

impl HttpMailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        sender: String,
        recipient: String,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = reqwest::Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            authorization_token,
            sender,
            recipient,
        }
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
}

#[async_trait]
impl MailNotifier for HttpMailClient {
    #[tracing::instrument(name = "Sending an email notification", skip(self, html_body))]
    async fn send(&self, subject: &str, html_body: &str) -> Result<(), anyhow::Error> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: self.recipient.as_ref(),
            subject,
            html_body,
        };

        self.http_client
            .post(&url)
            .header(
                "X-Api-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await
            .context("Failed to reach the mail relay")?
            .error_for_status()
            .context("The mail relay rejected the notification")?;

        Ok(())
    }
}
