/// 초기 경매 목록 (목업 데이터)
/// 마감 시각은 기준 시각(anchor)으로부터의 상대 시간으로 정의한다.
// region:    --- Imports
use super::model::Auction;
use crate::category::Category;
use chrono::{DateTime, Duration, Utc};

// endregion: --- Imports

// region:    --- Seed
struct SeedAuction {
    slug: &'static str,
    title: &'static str,
    title_th: Option<&'static str>,
    artist: &'static str,
    category: Category,
    medium: Option<&'static str>,
    size: Option<&'static str>,
    image: &'static str,
    starting_bid: i64,
    current_bid: i64,
    // 기준 시각으로부터 마감까지 (분)
    ends_in_minutes: i64,
}

const SEED: &[SeedAuction] = &[
    SeedAuction {
        slug: "ocean-whisper",
        title: "Ocean Whisper",
        title_th: Some("เสียงกระซิบแห่งมหาสมุทร"),
        artist: "Naree Suksawat",
        category: Category::Painting,
        medium: Some("Oil on canvas"),
        size: Some("80 x 120 cm"),
        image: "/images/auctions/ocean-whisper.jpg",
        starting_bid: 12000,
        current_bid: 18500,
        ends_in_minutes: 3 * 60,
    },
    SeedAuction {
        slug: "golden-temple-dawn",
        title: "Golden Temple at Dawn",
        title_th: Some("วัดทองยามรุ่งอรุณ"),
        artist: "Somchai Wongdee",
        category: Category::Painting,
        medium: Some("Acrylic on canvas"),
        size: Some("60 x 90 cm"),
        image: "/images/auctions/golden-temple-dawn.jpg",
        starting_bid: 8000,
        current_bid: 8000,
        ends_in_minutes: -2 * 60,
    },
    SeedAuction {
        slug: "teak-guardian",
        title: "Teak Guardian",
        title_th: Some("ผู้พิทักษ์ไม้สัก"),
        artist: "Anan Chaiyaporn",
        category: Category::Sculpture,
        medium: Some("Carved teak wood"),
        size: Some("45 x 20 x 20 cm"),
        image: "/images/auctions/teak-guardian.jpg",
        starting_bid: 15000,
        current_bid: 21000,
        ends_in_minutes: 26 * 60,
    },
    SeedAuction {
        slug: "river-of-words",
        title: "River of Words",
        title_th: Some("สายน้ำแห่งถ้อยคำ"),
        artist: "Pim Rattanakul",
        category: Category::LiteratureEbook,
        medium: Some("EPUB"),
        size: None,
        image: "/images/auctions/river-of-words.jpg",
        starting_bid: 500,
        current_bid: 1200,
        ends_in_minutes: 45,
    },
    SeedAuction {
        slug: "neon-bangkok-poster",
        title: "Neon Bangkok Poster Series",
        title_th: None,
        artist: "Kittipong Srisuk",
        category: Category::GraphicDesign,
        medium: Some("Giclée print"),
        size: Some("A2"),
        image: "/images/auctions/neon-bangkok-poster.jpg",
        starting_bid: 3000,
        current_bid: 4600,
        ends_in_minutes: 6 * 60,
    },
    SeedAuction {
        slug: "celadon-tea-set",
        title: "Celadon Tea Set",
        title_th: Some("ชุดน้ำชาเซลาดอน"),
        artist: "Malee Boonmee",
        category: Category::Crafts,
        medium: Some("Stoneware, celadon glaze"),
        size: Some("6 pieces"),
        image: "/images/auctions/celadon-tea-set.jpg",
        starting_bid: 4500,
        current_bid: 5200,
        ends_in_minutes: 12 * 60,
    },
    SeedAuction {
        slug: "woven-sky-basket",
        title: "Woven Sky Basket",
        title_th: Some("ตะกร้าสานท้องฟ้า"),
        artist: "Malee Boonmee",
        category: Category::Crafts,
        medium: Some("Rattan"),
        size: Some("35 cm diameter"),
        image: "/images/auctions/woven-sky-basket.jpg",
        starting_bid: 1500,
        current_bid: 2300,
        ends_in_minutes: -30,
    },
    SeedAuction {
        slug: "pixel-ocean-dreams",
        title: "Pixel Ocean Dreams",
        title_th: None,
        artist: "Thanawat Kongsuk",
        category: Category::DigitalArt,
        medium: Some("Digital illustration"),
        size: Some("4000 x 4000 px"),
        image: "/images/auctions/pixel-ocean-dreams.png",
        starting_bid: 2000,
        current_bid: 3900,
        ends_in_minutes: 2 * 24 * 60,
    },
];

/// 기준 시각으로부터 초기 경매 목록 생성
pub fn seed_auctions(anchor: DateTime<Utc>) -> Vec<Auction> {
    SEED.iter()
        .map(|seed| Auction {
            slug: seed.slug.to_string(),
            title: seed.title.to_string(),
            title_th: seed.title_th.map(str::to_string),
            artist: seed.artist.to_string(),
            category: seed.category,
            medium: seed.medium.map(str::to_string),
            size: seed.size.map(str::to_string),
            image: seed.image.to_string(),
            starting_bid: seed.starting_bid,
            current_bid: seed.current_bid,
            starts_at: None,
            ends_at: anchor + Duration::minutes(seed.ends_in_minutes),
        })
        .collect()
}

// endregion: --- Seed
