use std::io;

use dotenvy::dotenv;
use order_confirmation::config::{OrderBackend, Settings};
use order_confirmation::infrastructure::http_lookup::HttpOrderLookup;
use order_confirmation::infrastructure::order_repo::DieselOrderLookup;
use order_confirmation::infrastructure::whatsapp::WhatsAppChannel;
use order_confirmation::{build_server, create_pool, run_migrations, AppState};

fn startup_error(e: impl std::fmt::Display) -> io::Error {
    io::Error::other(e.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(startup_error)?;
    let notifier = WhatsAppChannel::new(settings.whatsapp_number.clone());
    if settings.whatsapp_number.is_none() {
        log::warn!("WHATSAPP_NUMBER is not set; order notifications will be skipped");
    }

    let state = match &settings.backend {
        OrderBackend::Http { base_url } => {
            log::info!("Reading orders from {}", base_url);
            AppState::new(HttpOrderLookup::new(base_url).map_err(startup_error)?, notifier)
        }
        OrderBackend::Postgres { database_url } => {
            let pool = create_pool(database_url).map_err(startup_error)?;
            run_migrations(&pool).map_err(startup_error)?;
            log::info!("Reading orders from Postgres");
            AppState::new(DieselOrderLookup::new(pool), notifier)
        }
    };

    log::info!("Starting server at http://{}:{}", settings.host, settings.port);

    build_server(state, &settings.host, settings.port)?.await
}
