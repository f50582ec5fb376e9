pub mod errors;
pub mod notification;
pub mod order;
pub mod ports;
