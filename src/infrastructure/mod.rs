//! Infrastructure layer with external service adapters.

/// TMDB catalog and poster adapters.
pub mod api;
/// Application configuration.
pub mod config;
/// Completion delivery contexts.
pub mod dispatch;
/// HTTP transport adapters.
pub mod http;
/// Movie cache stores.
pub mod store;

pub use api::{RemoteMovieImageDataLoader, RemoteMovieLoader};
pub use config::{AppConfig, CliArgs, Command, ConfigError, ConfigLoader, LogLevel};
pub use dispatch::{ImmediateDelivery, MainQueue, MainQueueReceiver};
pub use http::{AuthenticatedHttpClient, ReqwestHttpClient};
pub use store::{FileMovieStore, InMemoryMovieStore};
