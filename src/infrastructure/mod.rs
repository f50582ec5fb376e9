pub mod http_lookup;
pub mod models;
pub mod order_repo;
pub mod whatsapp;
