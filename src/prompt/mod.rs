/// 입찰 입력창 연동
/// 입찰 버튼이 눌리면 해당 경매 id 와 함께 입찰 입력창을 띄우도록 요청한다.
/// 실제 입찰 처리는 별도 서비스가 담당한다고 가정
// region:    --- Imports
use tracing::info;

// endregion: --- Imports

// region:    --- Bid Entry Prompt
/// 입찰 입력창 트레이트
pub trait BidEntryPrompt: Send + Sync {
    fn present(&self, auction_id: &str, item_name: &str);
}

/// 로그로만 남기는 입찰 입력창
#[derive(Debug, Default, Clone)]
pub struct LoggingBidPrompt;

impl BidEntryPrompt for LoggingBidPrompt {
    fn present(&self, auction_id: &str, item_name: &str) {
        info!(
            "{:<12} --> 입찰 입력창 표시 id: {} ({})",
            "Prompt", auction_id, item_name
        );
    }
}
// endregion: --- Bid Entry Prompt
