#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::*;

/// 所有配置來源共用的驗證規則
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_socket_addr("bind_address", config.bind_address())?;
    validate_url("fun_fact.base_url", config.fun_fact_base_url())?;
    validate_range(
        "fun_fact.timeout_seconds",
        config.fun_fact_timeout().as_secs(),
        1,
        60,
    )?;
    validate_non_empty_string("fun_fact.fallback", config.fallback_fun_fact())?;

    tracing::debug!("✅ Configuration validation passed");
    Ok(())
}
