/// 경매 목록 분류기
/// 스냅샷 하나를 받아 종료(history) / 팔로우(following) / 진행 중(open) 세 영역으로 나눈다.
/// 입출력이 없는 순수 함수이며 스냅샷을 변경하지 않는다.
// region:    --- Imports
use super::model::{BidAction, DisplayZone, Row, RowStatus, ViewState};
use crate::auction::model::{Auction, AuctionSnapshot};
use crate::error::MalformedAuctionError;

// endregion: --- Imports

// region:    --- Classifier
/// 분류 결과: 표시 내용과 건너뛴 항목
#[derive(Debug, Default)]
pub struct Classification {
    pub views: ViewState,
    pub rejected: Vec<MalformedAuctionError>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AuctionViewClassifier {
    zone: DisplayZone,
}

impl AuctionViewClassifier {
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }

    /// 스냅샷 분류
    pub fn classify(&self, snapshot: &AuctionSnapshot) -> Classification {
        let mut result = Classification::default();

        for (id, entry) in snapshot.entries() {
            let auction = match entry {
                Ok(auction) => auction,
                Err(e) => {
                    result.rejected.push(e);
                    continue;
                }
            };

            let views = &mut result.views;
            if !auction.active {
                // 종료된 경매는 팔로우 여부와 관계없이 history 에만 남는다
                views.history.push(self.row(id, &auction, BidAction::Absent));
                continue;
            }

            let row = self.row(id, &auction, BidAction::Available);
            if auction.following {
                views.following.push(row.clone());
            } else {
                views.following.push(row.with_action(BidAction::Reserved));
            }
            views.open.push(row);
        }

        result
    }

    fn row(&self, id: &str, auction: &Auction, bid_action: BidAction) -> Row {
        Row {
            auction_id: id.to_string(),
            item_name: auction.item_name.clone(),
            current_price: auction.current_price(),
            end_time: auction.end_time,
            ends_at: self.zone.format(auction.end_time),
            status: if auction.active {
                RowStatus::Active
            } else {
                RowStatus::Closed
            },
            bid_action,
        }
    }
}
// endregion: --- Classifier
