/// 경매 목록 뷰
// region:    --- Imports
use crate::auction::model::AuctionSummary;
use chrono::{DateTime, Utc};

// endregion: --- Imports

// region:    --- Listing View

/// 목록 카드 렌더링. 데이터 정형(뷰 모델)과 표시를 분리하기 위해
/// 출력 문자열만 만들고 부수 효과는 없다.
pub fn render_listing(auctions: &[AuctionSummary], now: DateTime<Utc>) -> String {
    if auctions.is_empty() {
        return "No auctions available.\n".to_string();
    }

    let mut out = String::new();
    for auction in auctions {
        out.push_str(&render_card(auction, now));
    }
    out
}

fn render_card(auction: &AuctionSummary, now: DateTime<Utc>) -> String {
    let status = auction.effective_status(now);
    let item_value = auction
        .item_value
        .map(|value| format!("${:.2}", value))
        .unwrap_or_else(|| "N/A".to_string());
    let creator = auction
        .creator_username
        .clone()
        .unwrap_or_else(|| format!("User #{}", auction.creator_id));

    format!(
        "[{}] {}\n    {}\n    Item Value: {} | {} | Created by: {}\n",
        auction.id,
        auction.title,
        auction.description,
        item_value,
        status.to_uppercase(),
        creator
    )
}

// endregion: --- Listing View

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn summary(expires_in: Duration) -> AuctionSummary {
        AuctionSummary {
            id: 1,
            title: "Vintage clock".to_string(),
            description: "A clock".to_string(),
            starting_price: 10.0,
            status: "active".to_string(),
            created_at: Utc::now(),
            expires_at: Utc::now() + expires_in,
            winner_id: None,
            creator_id: 7,
            creator_username: None,
            item_value: None,
        }
    }

    #[test]
    fn renders_fallbacks_for_missing_optional_fields() {
        let rendered = render_listing(&[summary(Duration::hours(1))], Utc::now());
        assert!(rendered.contains("Item Value: N/A"));
        assert!(rendered.contains("Created by: User #7"));
        assert!(rendered.contains("ACTIVE"));
    }

    #[test]
    fn overrides_status_when_expiry_has_passed() {
        let rendered = render_listing(&[summary(Duration::seconds(-5))], Utc::now());
        assert!(rendered.contains("EXPIRED"));
        assert!(!rendered.contains("ACTIVE"));
    }

    #[test]
    fn empty_listing_renders_placeholder() {
        assert_eq!(render_listing(&[], Utc::now()), "No auctions available.\n");
    }
}
