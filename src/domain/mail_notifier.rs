use async_trait::async_trait;

/// Email notification channel used to alert the operator.
///
/// Sender and recipient addresses are fixed per deployment; callers supply
/// the subject line and the rendered HTML body. One attempt per call, no
/// retries.
#[async_trait]
pub trait MailNotifier: Send + Sync {
    async fn send(&self, subject: &str, html_body: &str) -> Result<(), anyhow::Error>;
}
