/// 경매 목록 조회
/// 외부 경매 목록 서비스(`GET /api/auctions`)에서 현재 스냅샷을 받아온다.
/// 받은 내용은 가공하지 않고 그대로 돌려준다.
// region:    --- Imports
use crate::auction::model::AuctionSnapshot;
use crate::error::FetchFailure;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

// endregion: --- Imports

// region:    --- Snapshot Source
/// 스냅샷 조회 트레이트
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<AuctionSnapshot, FetchFailure>;
}

/// HTTP 조회 구현체
#[derive(Debug, Clone)]
pub struct HttpSnapshotFetcher {
    client: Client,
    url: String,
}

impl HttpSnapshotFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotFetcher {
    async fn fetch(&self) -> Result<AuctionSnapshot, FetchFailure> {
        debug!("{:<12} --> 경매 목록 요청: {}", "Fetcher", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchFailure::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status));
        }

        let snapshot = response
            .json::<AuctionSnapshot>()
            .await
            .map_err(FetchFailure::Decode)?;
        debug!(
            "{:<12} --> 경매 목록 수신: {}건",
            "Fetcher",
            snapshot.len()
        );
        Ok(snapshot)
    }
}
// endregion: --- Snapshot Source
