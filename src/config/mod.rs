// region:    --- Imports
use crate::error::ConfigError;
use crate::view::DisplayZone;
use std::net::SocketAddr;
use std::time::Duration;

// endregion: --- Imports

// region:    --- Feed Config
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/auctions";
pub const DEFAULT_REFRESH_MS: u64 = 30_000;
pub const DEFAULT_VIEW_ADDR: &str = "0.0.0.0:3000";

/// 실행 설정 (환경 변수)
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub api_url: String,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub view_addr: SocketAddr,
    pub display_zone: DisplayZone,
}

impl FeedConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("AUCTION_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let refresh_ms = match lookup("AUCTION_REFRESH_MS") {
            Some(value) => parse_millis("AUCTION_REFRESH_MS", &value)?,
            None => DEFAULT_REFRESH_MS,
        };
        let timeout_ms = match lookup("AUCTION_HTTP_TIMEOUT_MS") {
            Some(value) => parse_millis("AUCTION_HTTP_TIMEOUT_MS", &value)?,
            None => refresh_ms,
        };

        let addr = lookup("AUCTION_VIEW_ADDR").unwrap_or_else(|| DEFAULT_VIEW_ADDR.to_string());
        let view_addr = addr.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            key: "AUCTION_VIEW_ADDR",
            value: addr.clone(),
            reason: e.to_string(),
        })?;

        let display_zone = match lookup("AUCTION_DISPLAY_TZ") {
            Some(value) => value.parse::<DisplayZone>().map_err(|reason| ConfigError::Invalid {
                key: "AUCTION_DISPLAY_TZ",
                value: value.clone(),
                reason,
            })?,
            None => DisplayZone::default(),
        };

        Ok(Self {
            api_url,
            refresh_interval: Duration::from_millis(refresh_ms),
            request_timeout: Duration::from_millis(timeout_ms),
            view_addr,
            display_zone,
        })
    }
}

fn parse_millis(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason,
    };
    let millis: u64 = value.trim().parse().map_err(|e| invalid(format!("{}", e)))?;
    if millis == 0 {
        return Err(invalid("0 보다 커야 합니다".to_string()));
    }
    Ok(millis)
}
// endregion: --- Feed Config

// endregion: --- Tests
