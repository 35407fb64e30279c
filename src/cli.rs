use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "maintcal",
    about = "Browse scheduled home maintenance events by month",
    version
)]
pub struct Cli {
    /// Calendar endpoint (overrides `api.endpoint` in the config file)
    #[arg(long, env = "MAINTCAL_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Config file (default: <config dir>/maintcal/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the calendar as text instead of opening the terminal view
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
    }
}
