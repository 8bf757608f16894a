use crate::core::number;
use crate::domain::model::{ClassificationResult, NumberProperty};
use crate::domain::ports::FunFactProvider;
use crate::utils::error::{ClassifierError, Result};
use std::sync::Arc;

/// 解析呼叫端提供的數字字串，只接受 u64 範圍內的非負整數
pub fn parse_number(token: &str) -> Result<u64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(ClassifierError::EmptyNumber);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClassifierError::InvalidNumber {
            input: token.to_string(),
        });
    }

    let canonical = match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };

    // "-0" 仍是零
    if negative && canonical != "0" {
        return Err(ClassifierError::NegativeNumber {
            input: format!("-{}", canonical),
        });
    }

    canonical
        .parse()
        .map_err(|_| ClassifierError::NumberOutOfRange {
            input: canonical.to_string(),
        })
}

/// 不含趣聞的數論性質，可在阻塞執行緒池中計算
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberProfile {
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<NumberProperty>,
    pub digit_sum: u64,
}

impl NumberProfile {
    pub fn compute(n: u64) -> Self {
        let mut properties = vec![if number::is_even(n) {
            NumberProperty::Even
        } else {
            NumberProperty::Odd
        }];
        if number::is_armstrong(n) {
            properties.push(NumberProperty::Armstrong);
        }

        Self {
            is_prime: number::is_prime(n),
            is_perfect: number::is_perfect(n),
            properties,
            digit_sum: number::digit_sum(n),
        }
    }
}

#[derive(Clone)]
pub struct NumberClassifier {
    fun_facts: Arc<dyn FunFactProvider>,
}

impl NumberClassifier {
    pub fn new(fun_facts: Arc<dyn FunFactProvider>) -> Self {
        Self { fun_facts }
    }

    /// 解析並分類；輸入錯誤以 `ClassifierError` 回傳
    pub async fn classify_token(&self, token: &str) -> Result<ClassificationResult> {
        let number = parse_number(token)?;
        self.classify(number).await
    }

    pub async fn classify(&self, n: u64) -> Result<ClassificationResult> {
        tracing::debug!("Classifying {}", n);

        let profile_task = tokio::task::spawn_blocking(move || NumberProfile::compute(n));
        let (profile, fun_fact) = tokio::join!(profile_task, self.fun_facts.fun_fact(n));

        let profile = profile.map_err(|e| ClassifierError::ComputationError {
            number: n.to_string(),
            message: e.to_string(),
        })?;

        Ok(ClassificationResult {
            number: n,
            is_prime: profile.is_prime,
            is_perfect: profile.is_perfect,
            properties: profile.properties,
            digit_sum: profile.digit_sum,
            fun_fact,
        })
    }
}
