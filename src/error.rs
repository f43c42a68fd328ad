// region:    --- Imports
use reqwest::StatusCode;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Errors
/// 경매 목록 조회 실패
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("경매 목록 요청 실패: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("경매 목록 서버 응답 오류: {0}")]
    Status(StatusCode),

    #[error("경매 목록 응답 해석 실패: {0}")]
    Decode(#[source] reqwest::Error),
}

/// 필수 필드가 빠진 경매 항목
#[derive(Debug, Error)]
#[error("잘못된 경매 항목 id={id}: {source}")]
pub struct MalformedAuctionError {
    pub id: String,
    #[source]
    pub source: serde_json::Error,
}

/// 화면 반영 실패
#[derive(Debug, Error)]
pub enum RenderFailure {
    #[error("이전 사이클 결과 폐기 (cycle={cycle}, 표시 중={displayed})")]
    Stale { cycle: u64, displayed: u64 },

    #[error("화면 반영 거부: {0}")]
    Rejected(String),
}

/// 한 사이클의 실패
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchFailure),

    #[error(transparent)]
    Render(#[from] RenderFailure),
}

/// 설정 값 오류
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} 값이 잘못되었습니다: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
// endregion: --- Errors
