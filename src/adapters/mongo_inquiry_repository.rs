use crate::domain::inquiry_repository::{ConnectionState, InquiryRepository};
use crate::domain::new_inquiry::NewInquiry;
use anyhow::Context;
use async_trait::async_trait;
use mongodb::bson::{doc, DateTime};
use mongodb::{Client, Collection};
use secrecy::{ExposeSecret, Secret};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(serde::Serialize)]
struct InquiryDocument {
    name: String,
    email: String,
    message: String,
    created_at: DateTime,
}

/// MongoDB-backed inquiry store.
///
/// The connectivity flag is cached: it is set by the startup ping and
/// refreshed by the outcome of each write, so `connection_state` never
/// performs a round trip of its own.
#[derive(Clone)]
pub struct MongoInquiryRepository {
    collection: Collection<InquiryDocument>,
    connected: Arc<AtomicBool>,
}

impl MongoInquiryRepository {
    /// Build the driver and probe the deployment once. An unreachable store
    /// leaves the repository in the disconnected state rather than failing
    /// startup.
    pub async fn connect(
        uri: &Secret<String>,
        database_name: &str,
        collection_name: &str,
    ) -> Result<Self, anyhow::Error> {
        let client = Client::with_uri_str(uri.expose_secret())
            .await
            .context("Failed to initialise the MongoDB driver")?;
        let database = client.database(database_name);

        let connected = Arc::new(AtomicBool::new(false));
        match database.run_command(doc! { "ping": 1 }, None).await {
            Ok(_) => {
                connected.store(true, Ordering::SeqCst);
                tracing::info!("MongoDB connected");
            }
            Err(e) => {
                tracing::warn!(error = %e, "MongoDB unreachable at startup");
            }
        }

        Ok(Self {
            collection: database.collection(collection_name),
            connected,
        })
    }
}

#[async_trait]
impl InquiryRepository for MongoInquiryRepository {
    #[tracing::instrument(name = "Persisting a new inquiry", skip(self, inquiry))]
    async fn create(&self, inquiry: &NewInquiry) -> Result<String, anyhow::Error> {
        let document = InquiryDocument {
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            message: inquiry.message.clone(),
            created_at: DateTime::now(),
        };

        let result = self.collection.insert_one(&document, None).await;
        self.connected.store(result.is_ok(), Ordering::SeqCst);

        let inserted = result.context("Failed to insert the inquiry document")?;

        Ok(inserted
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| inserted.inserted_id.to_string()))
    }

    fn connection_state(&self) -> Result<ConnectionState, anyhow::Error> {
        Ok(match self.connected.load(Ordering::SeqCst) {
            true => ConnectionState::Connected,
            false => ConnectionState::Disconnected,
        })
    }
}
