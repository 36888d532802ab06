// Command line flags. Every flag defaults to the fixed value the tool is
// built around, so a bare `shoplist` prints the Einkaufsliste.

use crate::api::{API_BASE, DEFAULT_TIMEOUT};
use crate::resolve::PROJECT_NAME;
use crate::secret::SECRET_PATH;
use clap::Parser;
use std::time::Duration;

/// Print the Todoist shopping list, grouped by section, ready to paste into
/// a messenger.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the Todoist project to print
    #[arg(long, default_value = PROJECT_NAME)]
    pub project: String,

    /// Base URL of the Todoist REST API
    #[arg(long, default_value = API_BASE)]
    pub api_base: String,

    /// gopass entry holding the API token
    #[arg(long, default_value = SECRET_PATH)]
    pub secret_path: String,

    /// gopass executable to run
    #[arg(long, default_value = "gopass")]
    pub gopass_bin: String,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Default `env_logger` filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
