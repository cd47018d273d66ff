// region:    --- Imports
use chrono::Utc;
use musecraft_catalog::auction::AuctionCatalog;
use musecraft_catalog::config::Config;
use musecraft_catalog::handlers;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // 카탈로그 생성 (프로세스 시작 시각 기준)
    let catalog = Arc::new(AuctionCatalog::seeded(Utc::now()));
    info!(
        "{:<12} --> 카탈로그 초기화 성공: {}건",
        "Main",
        catalog.len()
    );

    // 라우터 설정
    let routes_all = handlers::routes(catalog);

    // 리스너 생성
    let listener = TcpListener::bind(config.addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
