pub use app_config::{AppConfig, CorsConfig, ServerConfig};

mod app_config;
