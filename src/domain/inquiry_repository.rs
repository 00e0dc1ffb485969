use crate::domain::new_inquiry::NewInquiry;
use async_trait::async_trait;

/// Cached connectivity state of the underlying store driver.
///
/// This mirrors what the driver last observed; it is not a live round-trip
/// probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Connected => "connected",
            ConnectionState::Disconnected => "disconnected",
        }
    }
}

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Persist one inquiry, returning the identifier of the stored record.
    async fn create(&self, inquiry: &NewInquiry) -> Result<String, anyhow::Error>;

    fn connection_state(&self) -> Result<ConnectionState, anyhow::Error>;
}
