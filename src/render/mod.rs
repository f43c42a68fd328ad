/// 화면 반영 경계
/// 컨트롤러는 새 ViewState 를 넘기기만 하고, 표시 중인 내용의 변경은 ViewBoard 가 담당한다.
// region:    --- Imports
use crate::error::RenderFailure;
use crate::prompt::BidEntryPrompt;
use crate::view::{Region, Row, ViewState};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

// endregion: --- Imports

// region:    --- View Renderer
/// 화면 반영 트레이트
pub trait ViewRenderer: Send + Sync {
    fn render(&self, views: ViewState) -> Result<(), RenderFailure>;
}
// endregion: --- View Renderer

// region:    --- View Board
/// 현재 표시 중인 세 영역
pub struct ViewBoard {
    current: RwLock<ViewState>,
    prompt: Arc<dyn BidEntryPrompt>,
}

impl ViewBoard {
    pub fn new(prompt: Arc<dyn BidEntryPrompt>) -> Self {
        Self {
            current: RwLock::new(ViewState::default()),
            prompt,
        }
    }

    /// 현재 표시 내용 복사본
    pub fn snapshot(&self) -> ViewState {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 영역 하나의 행 목록
    pub fn region(&self, region: Region) -> Vec<Row> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rows(region)
            .to_vec()
    }

    /// 입찰 버튼 동작: 버튼이 달린 행이면 입찰 입력창을 띄운다
    pub fn activate_bid(&self, auction_id: &str) -> Option<Row> {
        let row = self
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .bid_target(auction_id)
            .cloned();
        match &row {
            Some(row) => self.prompt.present(&row.auction_id, &row.item_name),
            None => debug!(
                "{:<12} --> 입찰 버튼이 없는 경매 id: {}",
                "Board", auction_id
            ),
        }
        row
    }
}

impl ViewRenderer for ViewBoard {
    fn render(&self, views: ViewState) -> Result<(), RenderFailure> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // 사이클 결과가 표시된 뒤에는 같거나 이전 사이클(0 포함)의 결과를 폐기
        if current.cycle != 0 && views.cycle <= current.cycle {
            return Err(RenderFailure::Stale {
                cycle: views.cycle,
                displayed: current.cycle,
            });
        }

        info!(
            "{:<12} --> 화면 갱신 cycle: {} (history {}, following {}, open {})",
            "Board",
            views.cycle,
            views.history.len(),
            views.following.len(),
            views.open.len()
        );
        *current = views;
        Ok(())
    }
}
// endregion: --- View Board

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LoggingBidPrompt;

    /// 락이 오염되어도 표시 내용은 유지되고 갱신도 계속된다
    #[test]
    fn test_poisoned_lock_is_recovered() {
        let board = Arc::new(ViewBoard::new(Arc::new(LoggingBidPrompt)));
        board.render(ViewState::default().with_cycle(1)).unwrap();

        let poisoner = Arc::clone(&board);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.current.write().unwrap();
            panic!("poison");
        })
        .join();
        assert!(board.current.is_poisoned());

        assert_eq!(board.snapshot().cycle, 1);
        board.render(ViewState::default().with_cycle(2)).unwrap();
        assert_eq!(board.snapshot().cycle, 2);
    }
}
// endregion: --- Tests
