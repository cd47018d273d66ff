// region:    --- Imports
use crate::auction::{AuctionStatus, Filter, ListOptions};
use crate::category::{slug_to_category, Category};
use serde::Deserialize;

// endregion: --- Imports

// region:    --- List Params
/// 목록 조회 URL 쿼리 파라미터
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ListParams {
    /// 쿼리 파라미터를 조회 옵션으로 변환
    pub fn into_options(self) -> ListOptions {
        ListOptions {
            q: self.q,
            category: parse_category(self.category.as_deref()),
            status: parse_status(self.status.as_deref()),
        }
    }
}

// 슬러그 우선, 그 다음 표시 이름
fn parse_category(value: Option<&str>) -> Filter<Category> {
    match value.map(str::trim) {
        None | Some("") | Some("all") => Filter::Any,
        Some(value) => slug_to_category(value)
            .or_else(|| Category::from_name(value))
            .map_or(Filter::Unknown, Filter::Only),
    }
}

fn parse_status(value: Option<&str>) -> Filter<AuctionStatus> {
    match value.map(str::trim) {
        None | Some("") => Filter::Any,
        Some(value) if value.eq_ignore_ascii_case("all") => Filter::Any,
        Some(value) => AuctionStatus::parse(value).map_or(Filter::Unknown, Filter::Only),
    }
}

// endregion: --- List Params
