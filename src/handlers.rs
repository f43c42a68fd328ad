// region:    --- Imports
use crate::render::ViewBoard;
use crate::view::{html, Region};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::future::Future;
use std::io;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Router
/// 화면 조회 및 입찰 버튼 라우터
pub fn router(board: Arc<ViewBoard>) -> Router {
    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/views", get(handle_get_views))
        .route("/views/:region", get(handle_get_region))
        .route("/auctions/:id/bid", post(handle_bid))
        .layer(cors)
        .with_state(board)
}

/// 종료 신호 대기
/// 신호 등록에 실패하면 오류를 남기고 서버는 계속 실행한다.
pub async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("{:<12} --> 종료 신호 수신", "Main"),
        Err(e) => {
            error!("{:<12} --> 종료 신호 등록 실패: {}", "Main", e);
            std::future::pending::<()>().await;
        }
    }
}
// endregion: --- Router

// region:    --- View Handlers

/// 전체 화면 조회
pub async fn handle_get_views(State(board): State<Arc<ViewBoard>>) -> impl IntoResponse {
    info!("{:<12} --> 전체 화면 조회", "Handler");
    Json(board.snapshot())
}

/// 영역별 테이블 본문 조회
pub async fn handle_get_region(
    State(board): State<Arc<ViewBoard>>,
    Path(region): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> 영역 조회: {}", "Handler", region);
    match region.parse::<Region>() {
        Ok(region) => Html(html::table_body(&board.region(region))).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, e).into_response(),
    }
}

// endregion: --- View Handlers

// region:    --- Bid Handlers

/// 입찰 버튼 동작
pub async fn handle_bid(
    State(board): State<Arc<ViewBoard>>,
    Path(auction_id): Path<String>,
) -> impl IntoResponse {
    info!("{:<12} --> 입찰 버튼 id: {}", "Handler", auction_id);
    match board.activate_bid(&auction_id) {
        Some(row) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "auction_id": row.auction_id,
                "item_name": row.item_name,
            })),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": "입찰할 수 있는 경매가 아닙니다.",
                "auction_id": auction_id,
            })),
        )
            .into_response(),
    }
}

// endregion: --- Bid Handlers
