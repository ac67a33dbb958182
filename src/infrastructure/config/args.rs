use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::app_config::LogLevel;
use crate::domain::entities::ApiKey;

#[derive(Debug, Parser)]
#[command(
    name = "cinematime",
    version,
    about = "Browse TMDB now-playing movies with an offline cache",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// TMDB API key.
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true, value_parser = parse_api_key, global = true)]
    pub api_key: Option<ApiKey>,

    /// Now-playing endpoint.
    #[arg(long, value_name = "URL", global = true)]
    pub catalog_url: Option<String>,

    /// Poster base URL.
    #[arg(long, value_name = "URL", global = true)]
    pub image_base_url: Option<String>,

    /// TMDB language tag, e.g. `en-US`.
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Cache snapshot file.
    #[arg(long, value_name = "PATH", global = true)]
    pub cache_path: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List now-playing movies, falling back to the cache when offline.
    NowPlaying {
        /// Catalog page.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Download a poster image.
    Poster {
        /// Poster path as returned by the catalog, e.g. `/abc.jpg`.
        path: String,
        /// Destination file.
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Delete the cache if it is unreadable or expired.
    ValidateCache,
    /// Delete the cache unconditionally.
    ClearCache,
}

fn parse_api_key(raw: &str) -> Result<ApiKey, String> {
    ApiKey::new(raw).ok_or_else(|| "API key must be a single non-empty token".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_playing_defaults_to_first_page() {
        let args = CliArgs::parse_from(["cinematime", "now-playing"]);
        assert_eq!(args.command, Command::NowPlaying { page: 1 });
    }

    #[test]
    fn test_page_zero_rejected() {
        let result = CliArgs::try_parse_from(["cinematime", "now-playing", "--page", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_poster_arguments() {
        let args = CliArgs::parse_from(["cinematime", "poster", "/abc.jpg", "-o", "abc.jpg"]);

        assert_eq!(
            args.command,
            Command::Poster {
                path: "/abc.jpg".to_string(),
                output: PathBuf::from("abc.jpg"),
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "cinematime",
            "validate-cache",
            "--api-key",
            "0123456789abcdef",
            "--log-level",
            "trace",
        ]);

        assert_eq!(args.command, Command::ValidateCache);
        assert_eq!(
            args.api_key.as_ref().map(ApiKey::as_str),
            Some("0123456789abcdef")
        );
        assert_eq!(args.log_level, Some(LogLevel::Trace));
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let result = CliArgs::try_parse_from(["cinematime", "clear-cache", "--api-key", " "]);
        assert!(result.is_err());
    }
}
