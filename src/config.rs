//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::controller::LoadPolicy;
use crate::news::DEFAULT_ENDPOINT;

/// Read the latest news in your terminal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "newsdesk", version, about)]
pub struct Config {
    /// JSON endpoint serving `{ "articles": [...] }`.
    #[arg(default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Minimum time the loading screen stays up before the request is sent.
    #[arg(long, value_name = "MS", default_value_t = 500)]
    pub loading_delay_ms: u64,

    /// Write logs to this file.  Nothing is logged without it.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn load_policy(&self) -> LoadPolicy {
        LoadPolicy {
            loading_delay: Duration::from_millis(self.loading_delay_ms),
        }
    }
}
