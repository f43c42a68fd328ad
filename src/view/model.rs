// region:    --- Imports
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// endregion: --- Imports

// region:    --- Row
/// 경매 상태 표시
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowStatus {
    Active,
    Closed,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowStatus::Active => f.write_str("Active"),
            RowStatus::Closed => f.write_str("Closed"),
        }
    }
}

/// 입찰 버튼 칸
/// - Available: 입찰 버튼 표시
/// - Reserved: 빈 칸만 유지 (팔로우하지 않은 진행 중 경매)
/// - Absent: 칸 자체가 없음 (종료된 경매)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidAction {
    Available,
    Reserved,
    Absent,
}

/// 화면에 그릴 한 줄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub auction_id: String,
    pub item_name: String,
    pub current_price: f64,
    pub end_time: DateTime<Utc>,
    pub ends_at: String,
    pub status: RowStatus,
    pub bid_action: BidAction,
}

impl Row {
    /// `$` + 가격 (10 -> "$10", 22.5 -> "$22.5")
    pub fn price_label(&self) -> String {
        format!("${}", self.current_price)
    }

    pub fn with_action(&self, bid_action: BidAction) -> Self {
        Self {
            bid_action,
            ..self.clone()
        }
    }
}
// endregion: --- Row

// region:    --- View State
/// 화면 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    History,
    Following,
    Open,
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "history" => Ok(Region::History),
            "following" => Ok(Region::Following),
            "open" => Ok(Region::Open),
            other => Err(format!("알 수 없는 영역: {}", other)),
        }
    }
}

/// 세 영역의 표시 내용. 매 사이클마다 통째로 교체된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub cycle: u64,
    pub history: Vec<Row>,
    pub following: Vec<Row>,
    pub open: Vec<Row>,
}

impl ViewState {
    pub fn with_cycle(mut self, cycle: u64) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn rows(&self, region: Region) -> &[Row] {
        match region {
            Region::History => &self.history,
            Region::Following => &self.following,
            Region::Open => &self.open,
        }
    }

    /// 입찰 버튼이 달린 행 조회
    pub fn bid_target(&self, auction_id: &str) -> Option<&Row> {
        self.open
            .iter()
            .chain(self.following.iter())
            .find(|row| row.auction_id == auction_id && row.bid_action == BidAction::Available)
    }
}
// endregion: --- View State

// region:    --- Display Zone
/// 종료 시각 표시 기준 시간대
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
}

impl DisplayZone {
    const FORMAT: &'static str = "%-m/%-d/%Y, %-I:%M:%S %p";

    /// 예: 1/2/2024, 3:04:05 PM
    pub fn format(&self, at: DateTime<Utc>) -> String {
        match self {
            DisplayZone::Local => at.with_timezone(&Local).format(Self::FORMAT).to_string(),
            DisplayZone::Utc => at.format(Self::FORMAT).to_string(),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(DisplayZone::Local),
            "utc" => Ok(DisplayZone::Utc),
            other => Err(format!("local 또는 utc 만 허용: {}", other)),
        }
    }
}
// endregion: --- Display Zone
