use crate::core::classifier::NumberClassifier;
use crate::domain::model::{ClassificationRequest, ErrorResult};
use crate::utils::error::{ClassifierError, Result};
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub const CLASSIFY_PATH: &str = "/api/classify-number";

#[derive(Clone)]
pub struct AppState {
    pub classifier: NumberClassifier,
}

/// 將分類錯誤轉為 JSON 錯誤回應
pub struct ApiError(pub ClassifierError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("❌ Classification failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let number = self.0.echoed_input().unwrap_or_default();
        (status, Json(ErrorResult::new(number))).into_response()
    }
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        Self(err)
    }
}

pub fn router(classifier: NumberClassifier) -> Router {
    Router::new()
        .route(CLASSIFY_PATH, get(classify_number))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { classifier })
}

/// 解析 `?number=<token>`；重複的 `number` 參數視為無效輸入
pub fn parse_request(raw_query: Option<&str>) -> Result<ClassificationRequest> {
    let values: Vec<String> = url::form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes())
        .filter(|(key, _)| key == "number")
        .map(|(_, value)| value.into_owned())
        .collect();

    match values.as_slice() {
        [] => Ok(ClassificationRequest::default()),
        [number] => Ok(ClassificationRequest {
            number: number.clone(),
        }),
        _ => Err(ClassifierError::InvalidNumber {
            input: values.join(","),
        }),
    }
}

async fn classify_number(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let request = parse_request(raw_query.as_deref())?;
    let result = state.classifier.classify_token(&request.number).await?;
    Ok(Json(result))
}

async fn healthz() -> &'static str {
    "OK"
}

pub async fn serve(addr: SocketAddr, classifier: NumberClassifier) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(classifier))
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("Failed to install CTRL+C handler: {}", e);
            }
            tracing::info!("Shutting down gracefully");
        })
        .await?;

    Ok(())
}
