// region:    --- Imports
use super::params::ListParams;
use crate::auction::{get_status, Auction, AuctionCatalog, AuctionStatus, CategoryCount};
use crate::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

// endregion: --- Imports

// region:    --- Auction View
/// 응답용 경매 모델 (상태와 남은 시간 포함)
#[derive(Debug, Clone, Serialize)]
pub struct AuctionView {
    #[serde(flatten)]
    pub auction: Auction,
    pub status: AuctionStatus,
    pub seconds_remaining: Option<i64>,
}

impl AuctionView {
    pub fn new(auction: &Auction, now: DateTime<Utc>) -> Self {
        Self {
            auction: auction.clone(),
            status: get_status(auction, now),
            seconds_remaining: auction.time_remaining(now).map(|d| d.num_seconds()),
        }
    }
}

// endregion: --- Auction View

// region:    --- Query Handlers

/// 경매 목록 조회
pub fn list_auctions(
    catalog: &AuctionCatalog,
    params: ListParams,
    now: DateTime<Utc>,
) -> Vec<AuctionView> {
    info!("{:<12} --> 경매 목록 조회: {:?}", "Query", params);
    let options = params.into_options();
    catalog
        .list_auctions_at(&options, now)
        .into_iter()
        .map(|auction| AuctionView::new(auction, now))
        .collect()
}

/// 경매 조회
pub fn get_auction(catalog: &AuctionCatalog, slug: &str, now: DateTime<Utc>) -> Result<AuctionView> {
    info!("{:<12} --> 경매 조회 slug: {}", "Query", slug);
    catalog
        .get_auction_by_slug(slug)
        .map(|auction| AuctionView::new(auction, now))
        .ok_or_else(|| CatalogError::AuctionNotFound(slug.to_string()))
}

/// 카테고리별 경매 수 조회
pub fn get_category_counts(catalog: &AuctionCatalog, now: DateTime<Utc>) -> Vec<CategoryCount> {
    info!("{:<12} --> 카테고리 조회", "Query");
    catalog.category_counts(now)
}

// endregion: --- Query Handlers
