use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("경매를 찾을 수 없습니다: {0}")]
    AuctionNotFound(String),

    #[error("설정 오류: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::AuctionNotFound(_) => "AUCTION_NOT_FOUND",
            CatalogError::Config(_) => "CONFIG_ERROR",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::AuctionNotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({
                "error": self.to_string(),
                "code": self.code()
            })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
