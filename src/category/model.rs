use serde::{Deserialize, Serialize};
use std::fmt;

// 작품 카테고리 (고정된 닫힌 집합)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Painting,
    Sculpture,
    #[serde(rename = "Literature (E-book)")]
    LiteratureEbook,
    #[serde(rename = "Graphic Design")]
    GraphicDesign,
    Crafts,
    #[serde(rename = "Digital Art")]
    DigitalArt,
}

/// 선언 순서대로 정렬된 전체 카테고리 목록
pub const CATEGORIES: [Category; 6] = [
    Category::Painting,
    Category::Sculpture,
    Category::LiteratureEbook,
    Category::GraphicDesign,
    Category::Crafts,
    Category::DigitalArt,
];

impl Category {
    /// 화면에 표시되는 카테고리 이름
    pub fn name(&self) -> &'static str {
        match self {
            Category::Painting => "Painting",
            Category::Sculpture => "Sculpture",
            Category::LiteratureEbook => "Literature (E-book)",
            Category::GraphicDesign => "Graphic Design",
            Category::Crafts => "Crafts",
            Category::DigitalArt => "Digital Art",
        }
    }

    /// 표시 이름과 정확히 일치하는 카테고리 조회
    pub fn from_name(name: &str) -> Option<Category> {
        CATEGORIES.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
