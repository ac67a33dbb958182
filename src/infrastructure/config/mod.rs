//! Application configuration.

pub mod app_config;
pub mod args;
pub mod locale;
pub mod storage;

pub use app_config::{AppConfig, LogLevel};
pub use args::{CliArgs, Command};
pub use locale::tmdb_language_tag;
pub use storage::{ConfigError, ConfigLoader};
