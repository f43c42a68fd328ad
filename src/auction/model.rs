// region:    --- Imports
use crate::error::MalformedAuctionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// endregion: --- Imports

// region:    --- Auction Model
// 입찰 모델 (목록은 시간순, 마지막 입찰이 현재 최고가)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder: Option<String>,
}

// 경매 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub item_name: String,
    pub starting_bid: f64,
    pub bids: Vec<Bid>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub active: bool,
    #[serde(default)]
    pub following: bool,
}

impl Auction {
    /// 현재 가격: 마지막 입찰가, 입찰이 없으면 시작가
    pub fn current_price(&self) -> f64 {
        self.bids
            .last()
            .map(|bid| bid.amount)
            .unwrap_or(self.starting_bid)
    }
}
// endregion: --- Auction Model

// region:    --- Snapshot
/// 한 번의 조회로 받은 전체 경매 목록
/// 항목은 검증 전 원본 JSON 그대로 보관하고, 항목별 검증은 `entries`에서 수행한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionSnapshot {
    pub auctions: BTreeMap<String, serde_json::Value>,
}

impl AuctionSnapshot {
    pub fn len(&self) -> usize {
        self.auctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty()
    }

    /// id 순으로 경매 항목을 해석
    pub fn entries(
        &self,
    ) -> impl Iterator<Item = (&str, Result<Auction, MalformedAuctionError>)> + '_ {
        self.auctions.iter().map(|(id, raw)| {
            let parsed = Auction::deserialize(raw).map_err(|source| MalformedAuctionError {
                id: id.clone(),
                source,
            });
            (id.as_str(), parsed)
        })
    }
}
// endregion: --- Snapshot
