pub mod notification;
pub mod order_loader;
