use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Service settings, read from `SWALLOW_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log shipping.
    Json,
    /// Human-readable lines.
    Text,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Unset variables take their defaults;
    /// set-but-invalid ones are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let raw_addr = lookup("SWALLOW_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid SWALLOW_BIND_ADDR '{raw_addr}': {e}"))?;

        let log_format = match lookup("SWALLOW_LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("text") => LogFormat::Text,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid SWALLOW_LOG_FORMAT '{other}': expected 'json' or 'text'"
                ));
            }
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}

impl LogFormat {
    /// Install the global subscriber. Filtering comes from `RUST_LOG`.
    pub fn init_tracing(self) {
        let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
        match self {
            Self::Json => builder.json().init(),
            Self::Text => builder.init(),
        }
    }
}
