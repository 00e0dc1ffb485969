use async_trait::async_trait;

/// Chat-style notification channel used to alert the operator.
///
/// The sender and recipient are fixed per deployment and held by the
/// implementation; callers only supply the rendered message body. One attempt
/// per call, no retries.
#[async_trait]
pub trait MessagingNotifier: Send + Sync {
    async fn send(&self, body: &str) -> Result<(), anyhow::Error>;
}
