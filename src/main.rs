use confreg::configuration::get_configuration;
use confreg::startup::Application;
use confreg::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // We are falling back to printing all spans at info-level or above if the
    // RUST_LOG environment variable has not been set.
    let subscriber = get_subscriber("confreg".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Panic if we can't read configuration
    let configuration = get_configuration().expect("Failed to read configuration");

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;

    Ok(())
}
