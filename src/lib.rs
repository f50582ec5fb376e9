pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;
pub mod view;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};

use domain::ports::{NotificationChannel, OrderLookup};

pub use db::{create_pool, run_migrations, DbPool};

/// Collaborators shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn OrderLookup>,
    pub notifier: Arc<dyn NotificationChannel>,
}

impl AppState {
    pub fn new(lookup: impl OrderLookup, notifier: impl NotificationChannel) -> Self {
        Self {
            lookup: Arc::new(lookup),
            notifier: Arc::new(notifier),
        }
    }
}

/// Registers the confirmation page routes.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::order_success::health))
        .service(
            web::scope("/{locale}/order-success")
                .route("", web::get().to(handlers::order_success::show))
                .route("/notify", web::post().to(handlers::order_success::notify)),
        );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(routes)
    })
    .bind((host.to_string(), port))?
    .run())
}
