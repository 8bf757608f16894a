use crate::adapters::numbers_api::{DEFAULT_BASE_URL, DEFAULT_FALLBACK};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "number-classifier")]
#[command(about = "Classify integers over HTTP: primality, perfection, parity, Armstrong, digit sum")]
pub struct CliConfig {
    #[arg(
        long,
        env = "NUMBER_CLASSIFIER_BIND_ADDRESS",
        default_value = "127.0.0.1:8080"
    )]
    pub bind_address: String,

    #[arg(long, env = "NUMBER_CLASSIFIER_FUN_FACT_URL", default_value = DEFAULT_BASE_URL)]
    pub fun_fact_url: String,

    #[arg(long, env = "NUMBER_CLASSIFIER_FUN_FACT_TIMEOUT_SECS", default_value = "5")]
    pub fun_fact_timeout_secs: u64,

    #[arg(long, env = "NUMBER_CLASSIFIER_FALLBACK_FUN_FACT", default_value = DEFAULT_FALLBACK)]
    pub fallback_fun_fact: String,

    #[arg(long, env = "NUMBER_CLASSIFIER_CONFIG", help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Classify a single number and print the JSON result
    Classify { number: String },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn fun_fact_base_url(&self) -> &str {
        &self.fun_fact_url
    }

    fn fun_fact_timeout(&self) -> Duration {
        Duration::from_secs(self.fun_fact_timeout_secs)
    }

    fn fallback_fun_fact(&self) -> &str {
        &self.fallback_fun_fact
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        super::validate_provider(self)
    }
}
