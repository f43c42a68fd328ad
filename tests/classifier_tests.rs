use auction_feed::auction::model::AuctionSnapshot;
use auction_feed::view::html;
use auction_feed::view::{AuctionViewClassifier, BidAction, DisplayZone, Region, RowStatus};
use serde_json::{json, Value};

const END_TIME: i64 = 1_700_000_000;

/// 테스트용 스냅샷 생성
fn snapshot(auctions: Value) -> AuctionSnapshot {
    serde_json::from_value(json!({ "auctions": auctions })).expect("스냅샷 생성 실패")
}

fn classifier() -> AuctionViewClassifier {
    AuctionViewClassifier::new(DisplayZone::Utc)
}

/// 입찰 없는 진행 중 경매 (팔로우 안 함)
#[test]
fn test_open_auction_without_bids() {
    let snapshot = snapshot(json!({
        "A": {
            "item_name": "Vase",
            "starting_bid": 10,
            "bids": [],
            "end_time": END_TIME,
            "active": true,
            "following": false
        }
    }));

    let result = classifier().classify(&snapshot);
    let views = result.views;

    assert!(result.rejected.is_empty());
    assert!(views.history.is_empty());
    assert_eq!(views.open.len(), 1);
    assert_eq!(views.following.len(), 1);

    let open = &views.open[0];
    assert_eq!(open.auction_id, "A");
    assert_eq!(open.item_name, "Vase");
    assert_eq!(open.price_label(), "$10");
    assert_eq!(open.ends_at, "11/14/2023, 10:13:20 PM");
    assert_eq!(open.status, RowStatus::Active);
    assert_eq!(open.bid_action, BidAction::Available);

    // 팔로우하지 않은 경매는 빈 칸만 유지
    let following = &views.following[0];
    assert_eq!(following.price_label(), "$10");
    assert_eq!(following.bid_action, BidAction::Reserved);
}

/// 종료된 경매는 history 에만 남는다
#[test]
fn test_closed_auction_only_in_history() {
    let snapshot = snapshot(json!({
        "A": {
            "item_name": "Vase",
            "starting_bid": 10,
            "bids": [],
            "end_time": END_TIME,
            "active": false,
            "following": false
        },
        "B": {
            "item_name": "Lamp",
            "starting_bid": 5,
            "bids": [{ "amount": 7 }],
            "end_time": END_TIME,
            "active": false,
            "following": true
        }
    }));

    let views = classifier().classify(&snapshot).views;

    assert!(views.open.is_empty());
    assert!(views.following.is_empty());
    assert_eq!(views.history.len(), 2);
    assert_eq!(views.history[0].price_label(), "$10");
    assert_eq!(views.history[1].price_label(), "$7");
    for row in &views.history {
        assert_eq!(row.status, RowStatus::Closed);
        assert_eq!(row.bid_action, BidAction::Absent);
    }
}

/// 팔로우 중인 진행 경매: 마지막 입찰가 표시, 두 영역 모두 입찰 버튼
#[test]
fn test_followed_auction_uses_last_bid() {
    let snapshot = snapshot(json!({
        "C": {
            "item_name": "Clock",
            "starting_bid": 10,
            "bids": [
                { "amount": 15, "bidder": "alice" },
                { "amount": 22, "bidder": "bob", "signature": "ab12" }
            ],
            "end_time": END_TIME,
            "active": true,
            "following": true
        }
    }));

    let views = classifier().classify(&snapshot).views;

    assert!(views.history.is_empty());
    assert_eq!(views.open.len(), 1);
    assert_eq!(views.following.len(), 1);
    assert_eq!(views.open[0].current_price, 22.0);
    assert_eq!(views.open[0].price_label(), "$22");
    assert_eq!(views.open[0], views.following[0]);
    assert_eq!(views.following[0].bid_action, BidAction::Available);
}

/// 여러 경매가 섞인 경우 영역별 순서는 스냅샷 순서를 따른다
#[test]
fn test_mixed_snapshot_preserves_order() {
    let snapshot = snapshot(json!({
        "1": { "item_name": "Book", "starting_bid": 3.5, "bids": [], "end_time": END_TIME, "active": true, "following": true },
        "2": { "item_name": "Chair", "starting_bid": 20, "bids": [], "end_time": END_TIME, "active": false, "following": true },
        "3": { "item_name": "Desk", "starting_bid": 40, "bids": [{ "amount": 41.5 }], "end_time": END_TIME, "active": true, "following": false },
        "4": { "item_name": "Easel", "starting_bid": 8, "bids": [], "end_time": END_TIME, "active": true }
    }));

    let views = classifier().classify(&snapshot).views;

    let names = |region: Region| -> Vec<String> {
        views
            .rows(region)
            .iter()
            .map(|row| row.item_name.clone())
            .collect()
    };
    assert_eq!(names(Region::History), vec!["Chair"]);
    assert_eq!(names(Region::Open), vec!["Book", "Desk", "Easel"]);
    assert_eq!(names(Region::Following), vec!["Book", "Desk", "Easel"]);

    let actions: Vec<BidAction> = views.following.iter().map(|row| row.bid_action).collect();
    assert_eq!(
        actions,
        vec![BidAction::Available, BidAction::Reserved, BidAction::Reserved]
    );
    assert_eq!(views.open[0].price_label(), "$3.5");
    assert_eq!(views.open[1].price_label(), "$41.5");
}

/// 잘못된 항목은 건너뛰고 나머지는 분류
#[test]
fn test_malformed_auction_is_skipped() {
    let snapshot = snapshot(json!({
        "bad-bids": { "item_name": "Rug", "starting_bid": 1, "end_time": END_TIME, "active": true },
        "bad-active": { "item_name": "Mug", "starting_bid": 1, "bids": [], "end_time": END_TIME },
        "bad-price": { "item_name": "Pen", "bids": [], "end_time": END_TIME, "active": true },
        "good": { "item_name": "Vase", "starting_bid": 10, "bids": [], "end_time": END_TIME, "active": true, "following": true }
    }));

    let result = classifier().classify(&snapshot);

    let mut rejected: Vec<&str> = result.rejected.iter().map(|e| e.id.as_str()).collect();
    rejected.sort();
    assert_eq!(rejected, vec!["bad-active", "bad-bids", "bad-price"]);
    assert_eq!(result.views.open.len(), 1);
    assert_eq!(result.views.open[0].auction_id, "good");
}

/// 같은 스냅샷은 항상 같은 결과
#[test]
fn test_classify_is_idempotent() {
    let snapshot = snapshot(json!({
        "A": { "item_name": "Vase", "starting_bid": 10, "bids": [{ "amount": 12 }], "end_time": END_TIME, "active": true, "following": false },
        "B": { "item_name": "Lamp", "starting_bid": 5, "bids": [], "end_time": END_TIME, "active": false, "following": true },
        "C": { "item_name": 42 }
    }));
    let before = snapshot.clone();

    let first = classifier().classify(&snapshot);
    let second = classifier().classify(&snapshot);

    assert_eq!(first.views, second.views);
    assert_eq!(first.rejected.len(), second.rejected.len());
    assert_eq!(snapshot, before);
}

/// 빈 스냅샷
#[test]
fn test_empty_snapshot() {
    let result = classifier().classify(&AuctionSnapshot::default());
    assert!(result.views.history.is_empty());
    assert!(result.views.following.is_empty());
    assert!(result.views.open.is_empty());
    assert!(result.rejected.is_empty());
}

/// 영역별 테이블 본문 HTML
#[test]
fn test_table_body_html() {
    let snapshot = snapshot(json!({
        "A": { "item_name": "Vase & <Bowl>", "starting_bid": 10, "bids": [], "end_time": END_TIME, "active": true, "following": false },
        "B": { "item_name": "Lamp", "starting_bid": 5, "bids": [], "end_time": END_TIME, "active": false }
    }));
    let views = classifier().classify(&snapshot).views;

    assert_eq!(
        html::table_body(&views.open),
        "<tr><td>Vase &amp; &lt;Bowl&gt;</td><td>$10</td><td>11/14/2023, 10:13:20 PM</td><td>Active</td>\
         <td><button class=\"bid-button fa fa-money\" data-auction-id=\"A\"></button></td></tr>"
    );
    assert_eq!(
        html::table_body(&views.following),
        "<tr><td>Vase &amp; &lt;Bowl&gt;</td><td>$10</td><td>11/14/2023, 10:13:20 PM</td><td>Active</td><td></td></tr>"
    );
    assert_eq!(
        html::table_body(&views.history),
        "<tr><td>Lamp</td><td>$5</td><td>11/14/2023, 10:13:20 PM</td><td>Closed</td></tr>"
    );
}
