// region:    --- Imports
use auction_feed::config::FeedConfig;
use auction_feed::fetcher::HttpSnapshotFetcher;
use auction_feed::handlers;
use auction_feed::prompt::LoggingBidPrompt;
use auction_feed::render::ViewBoard;
use auction_feed::scheduler::FeedController;
use auction_feed::view::AuctionViewClassifier;
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
    let config = match FeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{:<12} --> 설정 로드 실패: {}", "Main", e);
            return Err(e.into());
        }
    };

    // 화면 보드 및 입찰 입력창
    let board = Arc::new(ViewBoard::new(Arc::new(LoggingBidPrompt)));

    // 경매 목록 갱신 시작
    let fetcher = HttpSnapshotFetcher::new(config.api_url.clone(), config.request_timeout)?;
    info!("{:<12} --> 경매 목록 서비스: {}", "Main", fetcher.url());
    let controller = FeedController::new(
        Arc::new(fetcher),
        AuctionViewClassifier::new(config.display_zone),
        board.clone(),
        config.refresh_interval,
    );
    let feed = controller.start();

    // 리스너 생성
    let listener = TcpListener::bind(config.view_addr).await?;
    info!(
        "{:<12} --> View Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행 (Ctrl+C 로 종료)
    let server = axum::serve(listener, handlers::router(board).into_make_service())
        .with_graceful_shutdown(handlers::shutdown_signal(tokio::signal::ctrl_c()));
    if let Err(err) = server.await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }

    feed.abort();
    info!("{:<12} --> 종료", "Main");
    Ok(())
}
// endregion: --- Main
