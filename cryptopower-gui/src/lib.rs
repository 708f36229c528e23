pub mod app;
pub mod dir;
pub mod logger;
pub mod wallet;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
