pub mod logger;
pub mod phone;
pub mod state;
pub mod views;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
