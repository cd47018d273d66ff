// region:    --- Imports
use crate::auction::{AuctionCatalog, CategoryCount};
use crate::error::CatalogError;
use crate::query;
use crate::query::handlers::AuctionView;
use crate::query::params::ListParams;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

// endregion: --- Imports

// region:    --- Routes
/// 읽기 전용 라우터 생성
pub fn routes(catalog: Arc<AuctionCatalog>) -> Router {
    // 프론트엔드 개발 서버를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auctions", get(handle_get_auctions))
        .route("/auctions/:slug", get(handle_get_auction))
        .route("/categories", get(handle_get_categories))
        .layer(cors)
        .with_state(catalog)
}

// endregion: --- Routes

// region:    --- Query Handlers

/// 경매 목록 조회
pub async fn handle_get_auctions(
    State(catalog): State<Arc<AuctionCatalog>>,
    Query(params): Query<ListParams>,
) -> Json<Vec<AuctionView>> {
    info!("{:<12} --> 경매 목록 조회", "HandlerQuery");
    Json(query::handlers::list_auctions(&catalog, params, Utc::now()))
}

/// 경매 조회
pub async fn handle_get_auction(
    State(catalog): State<Arc<AuctionCatalog>>,
    Path(slug): Path<String>,
) -> Result<Json<AuctionView>, CatalogError> {
    info!("{:<12} --> 경매 조회 slug: {}", "HandlerQuery", slug);
    query::handlers::get_auction(&catalog, &slug, Utc::now()).map(Json)
}

/// 카테고리 목록 조회
pub async fn handle_get_categories(
    State(catalog): State<Arc<AuctionCatalog>>,
) -> Json<Vec<CategoryCount>> {
    info!("{:<12} --> 카테고리 목록 조회", "HandlerQuery");
    Json(query::handlers::get_category_counts(&catalog, Utc::now()))
}

// endregion: --- Query Handlers
