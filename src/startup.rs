use crate::adapters::http_mail_client::HttpMailClient;
use crate::adapters::mongo_inquiry_repository::MongoInquiryRepository;
use crate::adapters::twilio_messaging_client::TwilioMessagingClient;
use crate::configuration::Settings;
use crate::domain::inquiry_repository::InquiryRepository;
use crate::domain::mail_notifier::MailNotifier;
use crate::domain::messaging_notifier::MessagingNotifier;
use crate::routes::{health_check, submit_contact};
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Construct the three shared clients once and start listening. Each
    /// client lives for the whole process and is reused by every request.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))?;
        let port = listener.local_addr().unwrap().port();

        let repository = MongoInquiryRepository::connect(
            &configuration.database.uri,
            &configuration.database.database_name,
            &configuration.database.collection_name,
        )
        .await?;

        let messaging = TwilioMessagingClient::new(
            configuration.messaging.base_url.clone(),
            configuration.messaging.account_sid.clone(),
            configuration.messaging.auth_token.clone(),
            configuration.messaging.sender.clone(),
            configuration.messaging.recipient.clone(),
            configuration.messaging.timeout(),
        );

        let mailer = HttpMailClient::new(
            configuration.email.base_url.clone(),
            configuration.email.authorization_token.clone(),
            configuration.email.sender.clone(),
            configuration.email.recipient.clone(),
            configuration.email.timeout(),
        );

        let server = run(
            listener,
            Arc::new(repository),
            Arc::new(messaging),
            Arc::new(mailer),
            configuration.application.allowed_origins,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    repository: Arc<dyn InquiryRepository>,
    messaging: Arc<dyn MessagingNotifier>,
    mailer: Arc<dyn MailNotifier>,
    allowed_origins: Vec<String>,
) -> Result<Server, anyhow::Error> {
    let repository: Data<dyn InquiryRepository> = Data::from(repository);
    let messaging: Data<dyn MessagingNotifier> = Data::from(messaging);
    let mailer: Data<dyn MailNotifier> = Data::from(mailer);

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(header::CONTENT_TYPE);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .route("/contact", web::post().to(submit_contact))
            .route("/health", web::get().to(health_check))
            .app_data(repository.clone())
            .app_data(messaging.clone())
            .app_data(mailer.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
