use crate::configuration::{DatabaseSettings, Settings};
use crate::repository::{PostgresSpeakerRepository, SpeakerRepository};
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy_with(configuration.with_db())
}

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let repository = PostgresSpeakerRepository::new(connection_pool);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );

        let listener = TcpListener::bind(&address)?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(listener, repository)?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the application
    /// is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Builds the actix server on top of whichever repository implementation the
/// caller hands in - Postgres in the binary, the in-memory one in tests.
///
/// actix-web uses a *type-map* to represent its application state: a `HashMap`
/// that stores arbitrary data (using the `Any` type) against their unique type
/// identifier. `web::Data`, when a new request comes in, computes the `TypeId`
/// of the type you specified in the signature and, if there is a record
/// corresponding to it in the type-map, casts the retrieved `Any` value and
/// passes it to your handler. It is an interesting technique to perform what in
/// other language ecosystems might be referred to as *dependency injection*.
pub fn run<R>(listener: TcpListener, repository: R) -> Result<Server, std::io::Error>
where
    R: SpeakerRepository + Send + Sync + 'static,
{
    // Wrap the repository in a smart pointer
    let repository = web::Data::new(repository);
    let server = HttpServer::new(move || {
        App::new()
            // Middlewares are added using the `wrap` method on `App`
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .route(
                "/registrations",
                web::post().to(routes::register_speaker::<R>),
            )
            // Register the repository as part of the application state
            .app_data(repository.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
