/// 경매 목록 갱신 스케줄러
/// 조회 -> 분류 -> 화면 반영을 한 사이클로 보고, 정해진 간격마다 반복한다.
/// 사이클은 겹치지 않는다. 조회가 간격보다 오래 걸리면 밀린 틱은 건너뛰고
/// 이전 사이클이 끝난 뒤 다음 사이클을 시작한다.
// region:    --- Imports
use crate::error::CycleError;
use crate::fetcher::SnapshotSource;
use crate::render::ViewRenderer;
use crate::view::{AuctionViewClassifier, Classification};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error, info, warn};

// endregion: --- Imports

// region:    --- Feed Phase
/// 컨트롤러 상태
/// Idle -> Running -> Waiting -> Running -> ... (종료 상태 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Running { cycle: u64 },
    Waiting { cycle: u64 },
}

/// 사이클 결과 요약
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub cycle: u64,
    pub history: usize,
    pub following: usize,
    pub open: usize,
    pub rejected: usize,
}
// endregion: --- Feed Phase

// region:    --- Feed Controller
/// 경매 목록 갱신 컨트롤러
pub struct FeedController {
    source: Arc<dyn SnapshotSource>,
    classifier: AuctionViewClassifier,
    renderer: Arc<dyn ViewRenderer>,
    period: Duration,
    last_cycle: u64,
    phase: watch::Sender<FeedPhase>,
}

impl FeedController {
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        classifier: AuctionViewClassifier,
        renderer: Arc<dyn ViewRenderer>,
        period: Duration,
    ) -> Self {
        let (phase, _) = watch::channel(FeedPhase::Idle);
        Self {
            source,
            classifier,
            renderer,
            // tokio interval 은 0 간격을 허용하지 않는다
            period: period.max(Duration::from_millis(1)),
            last_cycle: 0,
            phase,
        }
    }

    /// 상태 변화 구독
    pub fn subscribe(&self) -> watch::Receiver<FeedPhase> {
        self.phase.subscribe()
    }

    pub fn phase(&self) -> FeedPhase {
        *self.phase.borrow()
    }

    /// 갱신 루프 시작
    pub fn start(self) -> JoinHandle<()> {
        info!(
            "{:<12} --> 경매 목록 갱신 시작 (간격 {}ms)",
            "Feed",
            self.period.as_millis()
        );
        tokio::spawn(self.run())
    }

    /// 갱신 루프. 첫 사이클은 즉시 실행된다.
    pub async fn run(mut self) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            // 실패해도 루프는 계속되고 이전 화면이 유지된다
            match self.run_cycle().await {
                Ok(report) => debug!("{:<12} --> 사이클 완료: {:?}", "Feed", report),
                Err(e) => error!("{:<12} --> 사이클 실패: {}", "Feed", e),
            }
        }
    }

    /// 사이클 한 번 실행: 조회 -> 분류 -> 화면 반영
    pub async fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        self.last_cycle += 1;
        let cycle = self.last_cycle;
        self.phase.send_replace(FeedPhase::Running { cycle });

        let result = self.execute(cycle).await;

        self.phase.send_replace(FeedPhase::Waiting { cycle });
        result
    }

    async fn execute(&self, cycle: u64) -> Result<CycleReport, CycleError> {
        let snapshot = self.source.fetch().await?;

        let Classification { views, rejected } = self.classifier.classify(&snapshot);
        for e in &rejected {
            warn!("{:<12} --> 항목 건너뜀: {}", "Classifier", e);
        }

        let report = CycleReport {
            cycle,
            history: views.history.len(),
            following: views.following.len(),
            open: views.open.len(),
            rejected: rejected.len(),
        };
        self.renderer.render(views.with_cycle(cycle))?;
        Ok(report)
    }
}
// endregion: --- Feed Controller
