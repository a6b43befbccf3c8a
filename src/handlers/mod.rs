pub mod health_handler;
pub mod name_handler;
