use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tokio::runtime::{Builder, Runtime};

use crate::meetup::TimezonePolicy;

/// Get-events endpoint of the Meetup API; `{}` is replaced by the group slug.
pub const DEFAULT_MEETUP_API_URL: &str = "https://api.meetup.com/{}/events";

pub const GROUP_PLACEHOLDER: &str = "{}";

#[derive(Debug, Parser)]
#[command(name = "meetup-timeline")]
#[command(about = "Server for turning meetup.com API data into a timeline")]
pub struct Cli {
    /// Host for the server
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port for the server
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Debug mode (verbose logging)
    #[arg(long)]
    pub debug: bool,

    /// Server backend to use
    #[arg(long, value_enum, default_value_t = ServerBackend::Auto)]
    pub server: ServerBackend,

    /// Meetup API key (see https://secure.meetup.com/meetup_api/key/)
    #[arg(long, env = "MEETUP_API_KEY", hide_env_values = true)]
    pub meetup_api_key: Option<String>,

    /// Meetup API URL for the get events endpoint.
    /// Use a {} for where the meetup slug should go.
    #[arg(long, default_value = DEFAULT_MEETUP_API_URL)]
    pub meetup_api_url: String,

    /// Timezone used when turning event timestamps into calendar dates
    #[arg(long, value_enum, default_value_t = TimezonePolicy::Utc)]
    pub timezone: TimezonePolicy,
}

/// Which tokio runtime serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServerBackend {
    /// Pick the default (multi-threaded) runtime
    Auto,
    /// Work-stealing thread pool
    MultiThread,
    /// Everything on the main thread
    CurrentThread,
}

impl ServerBackend {
    pub fn build_runtime(self) -> std::io::Result<Runtime> {
        let mut builder = match self {
            Self::Auto | Self::MultiThread => Builder::new_multi_thread(),
            Self::CurrentThread => Builder::new_current_thread(),
        };
        builder.enable_all().build()
    }
}

/// Startup configuration, read-only once the server is running.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub server: ServerBackend,
    /// Sent as the `key` query parameter; empty when none was configured.
    pub meetup_api_key: String,
    pub meetup_api_url: String,
    pub timezone: TimezonePolicy,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if !cli.meetup_api_url.contains(GROUP_PLACEHOLDER) {
            bail!(
                "--meetup-api-url must contain a {} placeholder for the group slug, got {}",
                GROUP_PLACEHOLDER,
                cli.meetup_api_url
            );
        }

        let meetup_api_key = cli.meetup_api_key.unwrap_or_else(|| {
            tracing::warn!("No Meetup API key configured, requests will be sent with an empty key");
            String::new()
        });

        Ok(Self {
            host: cli.host,
            port: cli.port,
            debug: cli.debug,
            server: cli.server,
            meetup_api_key,
            meetup_api_url: cli.meetup_api_url,
            timezone: cli.timezone,
        })
    }

    /// Default `EnvFilter` directives when `RUST_LOG` is not set.
    pub fn log_filter(debug: bool) -> &'static str {
        if debug {
            "meetup_timeline=debug,tower_http=debug"
        } else {
            "meetup_timeline=info,tower_http=info"
        }
    }

    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
