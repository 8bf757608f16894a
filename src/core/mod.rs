pub mod classifier;
pub mod number;

pub use crate::domain::model::{ClassificationResult, ErrorResult, NumberProperty};
pub use crate::domain::ports::{ConfigProvider, FunFactProvider};
pub use crate::utils::error::Result;
