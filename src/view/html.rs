// 영역별 테이블 본문(<tr> 목록) 생성
use super::model::{BidAction, Row};

const BID_BUTTON_CLASS: &str = "bid-button fa fa-money";

/// 행 목록을 `<tbody>` 안에 들어갈 HTML 로 변환
pub fn table_body(rows: &[Row]) -> String {
    rows.iter().map(table_row).collect()
}

pub fn table_row(row: &Row) -> String {
    let mut html = format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
        escape(&row.item_name),
        row.price_label(),
        escape(&row.ends_at),
        row.status
    );
    match row.bid_action {
        BidAction::Available => html.push_str(&format!(
            "<td><button class=\"{}\" data-auction-id=\"{}\"></button></td>",
            BID_BUTTON_CLASS,
            escape(&row.auction_id)
        )),
        BidAction::Reserved => html.push_str("<td></td>"),
        BidAction::Absent => {}
    }
    html.push_str("</tr>");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
