use axum::http::StatusCode;
use chrono::{Duration, Utc};
use musecraft_catalog::auction::{Auction, AuctionCatalog};
use musecraft_catalog::category::Category;
use musecraft_catalog::handlers;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 트레이싱 초기화
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .finish();
    // 여러 테스트에서 호출되므로 이미 설정된 경우는 무시
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 테스트 서버 실행 후 기본 URL 반환
async fn spawn_app(catalog: AuctionCatalog) -> String {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().unwrap();
    let app = handlers::routes(Arc::new(catalog));
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });
    info!("테스트 서버 시작: {}", addr);
    format!("http://{}", addr)
}

/// 테스트용 경매 생성
fn test_auction(slug: &str, title: &str, category: Category, ends_in_minutes: i64) -> Auction {
    Auction {
        slug: slug.to_string(),
        title: title.to_string(),
        title_th: None,
        artist: "TestArtist".to_string(),
        category,
        medium: None,
        size: None,
        image: format!("/images/{}.jpg", slug),
        starting_bid: 10000,
        current_bid: 12000,
        starts_at: None,
        ends_at: Utc::now() + Duration::minutes(ends_in_minutes),
    }
}

fn test_catalog() -> AuctionCatalog {
    AuctionCatalog::new(vec![
        test_auction("sea-closed", "Sea Glass", Category::Crafts, -60),
        test_auction("sea-late", "Sea Lantern", Category::Crafts, 600),
        test_auction("sea-soon", "Sea Shell Box", Category::Crafts, 30),
        test_auction("portrait", "Portrait of a Sea Captain", Category::Painting, 120),
        test_auction("poster", "Festival Poster", Category::GraphicDesign, 240),
    ])
}

async fn get_json(client: &Client, url: &str) -> (StatusCode, Value) {
    let response = client.get(url).send().await.expect("Failed to send request");
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let body = response.json::<Value>().await.expect("Invalid JSON body");
    (status, body)
}

fn slugs(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|a| a["slug"].as_str().unwrap().to_string())
        .collect()
}

/// 전체 목록 조회 테스트 (진행 중 → 마감, 마감 임박 순)
#[tokio::test]
async fn test_list_all_auctions() {
    let base = spawn_app(test_catalog()).await;
    let client = Client::new();

    let (status, body) = get_json(&client, &format!("{}/auctions", base)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        slugs(&body),
        vec!["sea-soon", "portrait", "poster", "sea-late", "sea-closed"]
    );
    assert_eq!(body[0]["status"], "live");
    assert_eq!(body[4]["status"], "closed");
    assert!(body[4]["seconds_remaining"].is_null());
}

/// 필터 조합 테스트
#[tokio::test]
async fn test_list_with_combined_filters() {
    let base = spawn_app(test_catalog()).await;
    let client = Client::new();

    let (status, body) = get_json(
        &client,
        &format!("{}/auctions?q=SEA&category=crafts&status=live", base),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body), vec!["sea-soon", "sea-late"]);

    let (_, closed) = get_json(
        &client,
        &format!("{}/auctions?q=sea&category=all&status=closed", base),
    )
    .await;
    assert_eq!(slugs(&closed), vec!["sea-closed"]);
}

/// 알 수 없는 필터 값 테스트 (빈 목록)
#[tokio::test]
async fn test_unknown_filters_return_empty_list() {
    let base = spawn_app(test_catalog()).await;
    let client = Client::new();

    let (status, body) = get_json(&client, &format!("{}/auctions?category=furniture", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = get_json(&client, &format!("{}/auctions?status=ended", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

/// 단건 조회 테스트
#[tokio::test]
async fn test_get_auction_by_slug() {
    let base = spawn_app(test_catalog()).await;
    let client = Client::new();

    let (status, body) = get_json(&client, &format!("{}/auctions/poster", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Festival Poster");
    assert_eq!(body["category"], "Graphic Design");
    assert_eq!(body["current_bid"], 12000);
    assert!(body["seconds_remaining"].as_i64().unwrap() > 0);

    let (status, body) = get_json(&client, &format!("{}/auctions/does-not-exist", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "AUCTION_NOT_FOUND");
}

/// 카테고리 집계 테스트
#[tokio::test]
async fn test_category_counts() {
    let base = spawn_app(test_catalog()).await;
    let client = Client::new();

    let (status, body) = get_json(&client, &format!("{}/categories", base)).await;
    assert_eq!(status, StatusCode::OK);

    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[2]["name"], "Literature (E-book)");
    assert_eq!(categories[2]["slug"], "literature-e-book");

    let crafts = categories
        .iter()
        .find(|c| c["slug"] == "crafts")
        .unwrap();
    assert_eq!(crafts["total"], 3);
    assert_eq!(crafts["live"], 2);
}

/// 초기 데이터 검색 테스트
#[tokio::test]
async fn test_seeded_catalog_search() {
    let base = spawn_app(AuctionCatalog::seeded(Utc::now())).await;
    let client = Client::new();

    let (status, body) = get_json(&client, &format!("{}/auctions?q=ocean", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body), vec!["ocean-whisper", "pixel-ocean-dreams"]);
}
