pub mod config;
pub mod logging;

pub use config::{AppConfig, EndpointConfig, UIConfig};
pub use logging::init_logging;
