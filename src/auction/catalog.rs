/// 경매 카탈로그 (읽기 전용 조회 모델)
/// 1. 슬러그로 조회
/// 2. 검색어/카테고리/상태 필터 + 정렬
/// 3. 카테고리별 집계
// region:    --- Imports
use super::model::{get_status, Auction, AuctionStatus};
use super::seed::seed_auctions;
use crate::category::{category_slugs, Category};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

// endregion: --- Imports

// region:    --- List Options
/// 단일 값 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    /// 필터 없음
    Any,
    Only(T),
    /// 알 수 없는 값: 어떤 경매와도 일치하지 않음
    Unknown,
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::Any
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::Any => true,
            Filter::Only(expected) => expected == value,
            Filter::Unknown => false,
        }
    }
}

/// 목록 조회 옵션 (모든 필터는 AND 로 결합)
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub q: Option<String>,
    pub category: Filter<Category>,
    pub status: Filter<AuctionStatus>,
}

impl ListOptions {
    // 비어 있는 검색어는 필터 없음
    fn normalized_query(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}

// 제목, 태국어 제목, 작가, 카테고리 중 하나라도 검색어를 포함하면 일치
fn matches_query(auction: &Auction, query: &str) -> bool {
    auction.title.to_lowercase().contains(query)
        || auction
            .title_th
            .as_deref()
            .is_some_and(|title| title.to_lowercase().contains(query))
        || auction.artist.to_lowercase().contains(query)
        || auction.category.name().to_lowercase().contains(query)
}

// endregion: --- List Options

// region:    --- Category Count
/// 카테고리별 경매 수
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    #[serde(rename = "name")]
    pub category: Category,
    pub slug: &'static str,
    pub total: usize,
    pub live: usize,
}

// endregion: --- Category Count

// region:    --- Auction Catalog
#[derive(Debug, Clone)]
pub struct AuctionCatalog {
    auctions: Vec<Auction>,
}

impl AuctionCatalog {
    /// 카탈로그 생성 (중복 슬러그는 경고만 하고 먼저 나온 항목이 우선)
    pub fn new(auctions: Vec<Auction>) -> Self {
        let mut seen = HashSet::new();
        for auction in &auctions {
            if !seen.insert(auction.slug.as_str()) {
                warn!(
                    "{:<12} --> 중복된 경매 슬러그: {}",
                    "Catalog", auction.slug
                );
            }
        }
        debug!("{:<12} --> 카탈로그 생성: {}건", "Catalog", auctions.len());
        Self { auctions }
    }

    /// 초기 데이터로 카탈로그 생성
    pub fn seeded(anchor: DateTime<Utc>) -> Self {
        Self::new(seed_auctions(anchor))
    }

    pub fn auctions(&self) -> &[Auction] {
        &self.auctions
    }

    pub fn len(&self) -> usize {
        self.auctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty()
    }

    /// 슬러그로 경매 조회
    pub fn get_auction_by_slug(&self, slug: &str) -> Option<&Auction> {
        self.auctions.iter().find(|auction| auction.slug == slug)
    }

    /// 현재 시각 기준 목록 조회
    pub fn list_auctions(&self, options: &ListOptions) -> Vec<&Auction> {
        self.list_auctions_at(options, Utc::now())
    }

    /// 목록 조회
    ///
    /// 모든 상태는 하나의 `now` 로 계산한다. 진행 중인 경매가 먼저 오고,
    /// 각 구간 안에서는 마감이 빠른 순으로 정렬한다 (안정 정렬).
    pub fn list_auctions_at(&self, options: &ListOptions, now: DateTime<Utc>) -> Vec<&Auction> {
        let query = options.normalized_query();

        let mut matched: Vec<(AuctionStatus, &Auction)> = self
            .auctions
            .iter()
            .map(|auction| (get_status(auction, now), auction))
            .filter(|(status, auction)| {
                options.category.matches(&auction.category)
                    && options.status.matches(status)
                    && query.as_deref().map_or(true, |q| matches_query(auction, q))
            })
            .collect();

        matched.sort_by(|(status_a, a), (status_b, b)| {
            let not_live_a = *status_a != AuctionStatus::Live;
            let not_live_b = *status_b != AuctionStatus::Live;
            not_live_a
                .cmp(&not_live_b)
                .then_with(|| a.ends_at.cmp(&b.ends_at))
        });

        matched.into_iter().map(|(_, auction)| auction).collect()
    }

    /// 카테고리별 전체/진행 중 경매 수 (카테고리 선언 순서)
    pub fn category_counts(&self, now: DateTime<Utc>) -> Vec<CategoryCount> {
        category_slugs()
            .map(|(category, slug)| {
                let in_category = self.auctions.iter().filter(|a| a.category == category);
                let (total, live) = in_category.fold((0, 0), |(total, live), auction| {
                    let is_live = get_status(auction, now) == AuctionStatus::Live;
                    (total + 1, live + usize::from(is_live))
                });
                CategoryCount {
                    category,
                    slug,
                    total,
                    live,
                }
            })
            .collect()
    }
}

// endregion: --- Auction Catalog
