pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::NumbersApiClient;
pub use app::server::{router, serve};
pub use core::classifier::{parse_number, NumberClassifier};
pub use domain::model::{ClassificationResult, ErrorResult, NumberProperty};
pub use utils::error::{ClassifierError, Result};
