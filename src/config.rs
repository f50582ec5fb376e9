use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a valid number, got '{0}'")]
    InvalidPort(String),
    #[error("Either ORDER_API_URL or DATABASE_URL must be set")]
    MissingBackend,
}

/// Where orders are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBackend {
    Http { base_url: String },
    Postgres { database_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub backend: OrderBackend,
    pub whatsapp_number: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key/value source. `ORDER_API_URL` takes
    /// precedence over `DATABASE_URL`.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let backend = match (var("ORDER_API_URL"), var("DATABASE_URL")) {
            (Some(base_url), _) => OrderBackend::Http { base_url },
            (None, Some(database_url)) => OrderBackend::Postgres { database_url },
            (None, None) => return Err(ConfigError::MissingBackend),
        };

        Ok(Self {
            host,
            port,
            backend,
            whatsapp_number: var("WHATSAPP_NUMBER"),
        })
    }
}
