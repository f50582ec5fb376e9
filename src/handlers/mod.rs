pub mod order_success;
