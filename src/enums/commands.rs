use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_HTML_PATH, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_STATIC_DIR,
};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Post a sample form submission to the webhook configured in the page
    Test {
        #[clap(long, default_value = DEFAULT_HTML_PATH)]
        html: PathBuf,
        /// Request timeout in seconds
        #[clap(short, long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
        timeout: u64,
    },
    /// Store a webhook URL in the config file and the site's HTML pages
    Configure {
        url: String,
        #[clap(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
        #[clap(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Re-inject the configured webhook URL into the HTML pages
    Build {
        #[clap(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
        #[clap(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Test {
            html: PathBuf::from(DEFAULT_HTML_PATH),
            timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
