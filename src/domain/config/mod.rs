//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, GoogleConfig, DEFAULT_GEMINI_MODEL, DEFAULT_PORT, DEFAULT_SERVER_URL,
    DEFAULT_STATIC_DIR,
};
