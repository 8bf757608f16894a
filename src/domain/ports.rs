use async_trait::async_trait;
use std::time::Duration;

/// 取得數字趣聞的外部服務。實作必須自行處理失敗並回傳備用文字，不向上傳遞錯誤。
#[async_trait]
pub trait FunFactProvider: Send + Sync {
    async fn fun_fact(&self, number: u64) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn fun_fact_base_url(&self) -> &str;
    fn fun_fact_timeout(&self) -> Duration;
    fn fallback_fun_fact(&self) -> &str;
}
