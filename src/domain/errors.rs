use thiserror::Error;

/// Failure to get any answer out of the order lookup service. An answer that
/// carries an error message is not a `LookupError`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected status {0} from order service")]
    Status(u16),
    #[error("Could not decode order service response: {0}")]
    Decode(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("No notification number configured")]
    NotConfigured,
    #[error("Invalid notification number: {0}")]
    InvalidNumber(String),
    #[error("Could not build notification link: {0}")]
    Link(String),
}
