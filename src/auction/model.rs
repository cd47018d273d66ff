use crate::category::Category;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// 경매 상태 (저장되지 않고 시각으로부터 계산됨)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Upcoming,
    Live,
    Closed,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Upcoming => "upcoming",
            AuctionStatus::Live => "live",
            AuctionStatus::Closed => "closed",
        }
    }

    /// 대소문자 구분 없이 상태 문자열 해석
    pub fn parse(value: &str) -> Option<AuctionStatus> {
        match value.to_ascii_lowercase().as_str() {
            "upcoming" => Some(AuctionStatus::Upcoming),
            "live" => Some(AuctionStatus::Live),
            "closed" => Some(AuctionStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 경매 상품 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_th: Option<String>,
    pub artist: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub image: String,
    pub starting_bid: i64,
    pub current_bid: i64,
    /// 없으면 마감 전까지 항상 진행 중
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: DateTime<Utc>,
}

impl Auction {
    /// 현재 시각 기준 상태
    pub fn status(&self) -> AuctionStatus {
        get_status(self, Utc::now())
    }

    /// 마감까지 남은 시간 (마감 후에는 None)
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        if self.ends_at <= now {
            return None;
        }
        Some(self.ends_at - now)
    }
}

/// 경매 상태 계산
///
/// `ends_at <= now` 이면 마감, 시작 전이면 예정, 그 외에는 진행 중.
pub fn get_status(auction: &Auction, now: DateTime<Utc>) -> AuctionStatus {
    if auction.ends_at <= now {
        return AuctionStatus::Closed;
    }
    match auction.starts_at {
        Some(starts_at) if now < starts_at => AuctionStatus::Upcoming,
        _ => AuctionStatus::Live,
    }
}
