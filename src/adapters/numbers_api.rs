use crate::core::{ConfigProvider, FunFactProvider};
use crate::utils::error::{ClassifierError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";
pub const DEFAULT_FALLBACK: &str = "No fun fact available.";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// numbersapi 風格的趣聞服務客戶端：`GET {base_url}/{n}/math`
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
    fallback: String,
}

impl NumbersApiClient {
    pub fn new(base_url: &str, timeout: Duration, fallback: &str) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback: fallback.to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.fun_fact_base_url(),
            config.fun_fact_timeout(),
            config.fallback_fun_fact(),
        )
    }

    pub fn fact_url(&self, number: u64) -> String {
        format!("{}/{}/math", self.base_url, number)
    }

    /// 單次請求，不重試；非 2xx 狀態視為失敗
    pub async fn fetch(&self, number: u64) -> Result<String> {
        let url = self.fact_url(number);
        tracing::debug!("Requesting fun fact from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Fun fact response status: {}", status);

        if !status.is_success() {
            return Err(ClassifierError::UpstreamStatus {
                url,
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        Ok(text.trim_end().to_string())
    }
}

#[async_trait]
impl FunFactProvider for NumbersApiClient {
    async fn fun_fact(&self, number: u64) -> String {
        match self.fetch(number).await {
            Ok(fact) => fact,
            Err(e) => {
                tracing::warn!("⚠️ Fun fact unavailable for {}: {}", number, e);
                self.fallback.clone()
            }
        }
    }
}
