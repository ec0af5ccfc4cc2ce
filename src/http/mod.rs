pub mod app_error;
pub mod callbacks;
pub mod datasets;
pub mod health;
pub mod server;
pub mod shell;
pub mod state;
