/// 카테고리 이름과 URL 슬러그 간의 양방향 매핑
// region:    --- Imports
use super::model::{Category, CATEGORIES};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

// endregion: --- Imports

// region:    --- Slugify
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static PARENTHESES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[()]").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// 문자열을 URL 슬러그로 변환
///
/// 소문자화 → 공백 묶음을 하이픈 하나로 → 괄호 제거 → 연속 하이픈 병합.
/// 앞뒤 공백은 잘라내지 않으므로 하이픈 하나로 남는다.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let stripped = PARENTHESES.replace_all(&hyphenated, "");
    HYPHEN_RUN.replace_all(&stripped, "-").into_owned()
}

// endregion: --- Slugify

// region:    --- Registry
struct Registry {
    // CATEGORIES 순서 유지
    slugs: Vec<(Category, String)>,
    by_slug: HashMap<String, Category>,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let slugs: Vec<(Category, String)> = CATEGORIES
        .iter()
        .map(|category| (*category, slugify(category.name())))
        .collect();
    let by_slug = slugs
        .iter()
        .map(|(category, slug)| (slug.clone(), *category))
        .collect();
    Registry { slugs, by_slug }
});

/// 카테고리 → 슬러그
pub fn category_to_slug(category: Category) -> &'static str {
    REGISTRY
        .slugs
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, slug)| slug.as_str())
        .unwrap_or_default()
}

/// 슬러그 → 카테고리 (없으면 None)
pub fn slug_to_category(slug: &str) -> Option<Category> {
    REGISTRY.by_slug.get(slug).copied()
}

/// 선언 순서대로 (카테고리, 슬러그) 순회
pub fn category_slugs() -> impl Iterator<Item = (Category, &'static str)> {
    REGISTRY
        .slugs
        .iter()
        .map(|(category, slug)| (*category, slug.as_str()))
}

// endregion: --- Registry
