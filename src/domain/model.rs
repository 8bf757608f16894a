use serde::{Deserialize, Serialize};

/// 查詢參數 `?number=<token>`，缺少時視為空字串
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassificationRequest {
    #[serde(default)]
    pub number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberProperty {
    Even,
    Odd,
    Armstrong,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: u64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<NumberProperty>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub number: String,
    pub error: bool,
}

impl ErrorResult {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            error: true,
        }
    }
}
