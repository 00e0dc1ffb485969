use contact_service::configuration::get_configuration;
use contact_service::startup::Application;
use contact_service::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("contact-service".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");

    let application = Application::build(configuration).await?;

    tracing::info!("Server running on port {}", application.port());

    application.run_until_stopped().await?;

    Ok(())
}
