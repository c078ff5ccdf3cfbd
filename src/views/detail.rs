/// 경매 상세 뷰
/// 로드 사이클마다 상세/전체 입찰/풀 상금을 조회해 뷰 상태를 다시 만든다.
/// 전체 입찰 목록은 뷰 필드에 캐시되어 랭킹과 차트가 중복 조회 없이 쓴다.
// region:    --- Imports
use crate::api::{ApiError, AuctionApi};
use crate::auction::model::{AuctionDetail, AuctionBid, PoolInfo};
use crate::stats;
use crate::views::chart::BidChart;
use chrono::{DateTime, Utc};
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Bid Controls

/// 입찰 조작부 표시 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidControls {
    pub enabled: bool,
    pub button_label: String,
}

impl Default for BidControls {
    fn default() -> Self {
        Self {
            enabled: true,
            button_label: "Place Bid".to_string(),
        }
    }
}

// endregion: --- Bid Controls

// region:    --- Detail View

pub struct DetailView {
    pub auction_id: i64,
    pub auction: Option<AuctionDetail>,
    pub all_bids: Vec<AuctionBid>,
    pub pool_info: Option<PoolInfo>,
    pub pool_error: Option<String>,
    pub controls: BidControls,
    chart: Option<BidChart>,
    expired_displayed: bool,
}

impl DetailView {
    pub fn new(auction_id: i64) -> Self {
        Self {
            auction_id,
            auction: None,
            all_bids: Vec::new(),
            pool_info: None,
            pool_error: None,
            controls: BidControls::default(),
            chart: None,
            expired_displayed: false,
        }
    }

    /// 상세 로드: 경매, 전체 입찰, 풀 상금 순서로 조회한다.
    /// 풀 상금 실패는 인라인 메시지로 강등하고 뷰 전체를 막지 않는다.
    pub async fn load<A: AuctionApi + Sync>(
        &mut self,
        api: &A,
        token: &str,
    ) -> Result<(), ApiError> {
        info!("{:<12} --> 상세 로드 시작 id: {}", "Detail", self.auction_id);

        let auction = api.get_auction(token, self.auction_id).await?;
        self.all_bids = api.get_auction_bids(token, self.auction_id).await?;
        self.rebuild_chart();

        match api.get_pool_info(token, self.auction_id).await {
            Ok(pool_info) => {
                self.pool_info = Some(pool_info);
                self.pool_error = None;
            }
            Err(e) => {
                error!("{:<12} --> 풀 상금 조회 실패: {}", "Detail", e);
                self.pool_info = None;
                self.pool_error = Some("Failed to load pool prize data".to_string());
            }
        }

        // 새 렌더 사이클: 만료 표시 상태를 초기화하고 즉시 재평가한다
        self.expired_displayed = false;
        self.controls = BidControls::default();
        self.auction = Some(auction);
        self.apply_expiry_check(Utc::now());
        Ok(())
    }

    /// 만료 감시 체크. 만료 표시로 전환했을 때만 true 를 반환하며,
    /// 이미 만료로 표시된 뒤에는 아무것도 바꾸지 않는다(멱등).
    /// 표시 전용이며 서버 판정을 대신하지 않는다.
    pub fn apply_expiry_check(&mut self, now: DateTime<Utc>) -> bool {
        if self.expired_displayed {
            return false;
        }
        let expired = match &self.auction {
            Some(auction) => auction.is_expired(now),
            None => false,
        };
        if !expired {
            return false;
        }

        self.expired_displayed = true;
        self.controls.enabled = false;
        self.controls.button_label = "Auction Expired".to_string();
        true
    }

    pub fn is_expired_displayed(&self) -> bool {
        self.expired_displayed
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.auction.as_ref().map(|auction| auction.expires_at)
    }

    pub fn chart(&self) -> Option<&BidChart> {
        self.chart.as_ref()
    }

    /// 차트 재구성. 이전 인스턴스를 먼저 폐기한 뒤 새로 만든다.
    fn rebuild_chart(&mut self) {
        drop(self.chart.take());
        let amounts: Vec<f64> = self.all_bids.iter().map(|bid| bid.amount).collect();
        self.chart = Some(BidChart::build(&amounts));
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        let auction = match &self.auction {
            Some(auction) => auction,
            None => return "Auction not loaded.\n".to_string(),
        };

        let mut out = String::new();
        out.push_str(&format!("{}\n", auction.title));
        if !auction.description.is_empty() {
            out.push_str(&format!("{}\n", auction.description));
        }
        out.push_str(&format!("Starting Price: ${}\n", auction.starting_price));

        let status = if self.expired_displayed {
            "expired"
        } else {
            auction.effective_status(now)
        };
        out.push_str(&format!("Status: {}\n", status.to_uppercase()));
        out.push_str(&format!(
            "Expires At: {}\n",
            auction.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if let Some(winner) = &auction.lowest_unique_bid {
            out.push_str(&format!("Current Winner: {}", winner.username));
            if winner.is_users_bid {
                out.push_str(" * You");
            }
            out.push('\n');
        }

        if self.controls.enabled {
            out.push_str(&format!("[{}]\n", self.controls.button_label));
        } else {
            out.push_str(&format!("[{}] (disabled)\n", self.controls.button_label));
        }

        out.push_str("\nYour Bids\n");
        out.push_str(&render_bid_history(auction));

        out.push_str("\nAll Bids Distribution\n");
        match &self.chart {
            Some(chart) if !chart.is_empty() => out.push_str(&chart.render()),
            _ => out.push_str("No bids yet\n"),
        }

        out.push_str("\nTop Bidders\n");
        out.push_str(&render_top_bidders(&self.all_bids));

        out.push_str("\nPool Prize Information\n");
        if let Some(pool_info) = &self.pool_info {
            out.push_str(&render_pool_info(pool_info));
        } else if let Some(message) = &self.pool_error {
            out.push_str(message);
            out.push('\n');
        }
        out
    }
}

/// 본인 입찰 이력: 최신순, 유니크/낙찰 배지 포함
fn render_bid_history(auction: &AuctionDetail) -> String {
    if auction.bids.is_empty() {
        return "You haven't placed any bids on this auction yet.\n".to_string();
    }

    let mut bids = auction.bids.clone();
    bids.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut out = String::new();
    for bid in &bids {
        let unique_badge = if bid.is_unique {
            "Unique"
        } else {
            "Not Unique"
        };
        let winner_badge = if bid.is_winner { ", Winning" } else { "" };
        out.push_str(&format!(
            "  ${} at {} [{}{}]\n",
            bid.amount,
            bid.created_at.format("%Y-%m-%d %H:%M:%S"),
            unique_badge,
            winner_badge
        ));
    }
    out
}

fn render_top_bidders(all_bids: &[AuctionBid]) -> String {
    let ranking = stats::top_bidders(all_bids);
    if ranking.is_empty() {
        return "No bids yet\n".to_string();
    }

    let mut out = String::new();
    for (index, bidder) in ranking.iter().enumerate() {
        let times = if bidder.count == 1 { "time" } else { "times" };
        out.push_str(&format!(
            "  TOP {}: {} participated {} {}\n",
            index + 1,
            bidder.username,
            bidder.count,
            times
        ));
    }
    out
}

/// 풀 상금 섹션: 서버가 계산한 값을 그대로 표시한다
pub fn render_pool_info(pool_info: &PoolInfo) -> String {
    let mut out = String::new();
    if let Some(item_value) = pool_info.item_value {
        out.push_str(&format!("Item Value Threshold: ${:.2}\n", item_value));
    }
    out.push_str(&format!("Current Pool Prize: ${:.2}\n", pool_info.pool_prize));

    if pool_info.top_bidders.is_empty() {
        out.push_str("No potential winners yet\n");
    } else {
        out.push_str("Potential Prize Winners\n");
        for bidder in &pool_info.top_bidders {
            out.push_str(&format!(
                "  Top {}: {} ({} bids) {}% ${:.2}\n",
                bidder.rank,
                bidder.username,
                bidder.bid_count,
                bidder.potential_percentage,
                bidder.potential_amount
            ));
        }
    }

    if pool_info.pool_distributed && !pool_info.winners.is_empty() {
        out.push_str("Pool Prize Winners\n");
        for winner in &pool_info.winners {
            out.push_str(&format!(
                "  Rank {}: {} {}% ${:.2}\n",
                winner.rank, winner.username, winner.percentage, winner.amount
            ));
        }
    }
    out
}

// endregion: --- Detail View

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::model::{BidRecord, LowestUniqueBid, PoolTopBidder, PoolWinner};
    use chrono::Duration;

    fn detail(expires_in: Duration) -> AuctionDetail {
        AuctionDetail {
            id: 1,
            title: "Rare stamp".to_string(),
            description: "A stamp".to_string(),
            starting_price: 5.0,
            status: "active".to_string(),
            created_at: Utc::now(),
            expires_at: Utc::now() + expires_in,
            winner_id: None,
            creator_id: 2,
            bids: Vec::new(),
            lowest_unique_bid: None,
        }
    }

    fn view_with(auction: AuctionDetail) -> DetailView {
        let mut view = DetailView::new(auction.id);
        view.auction = Some(auction);
        view
    }

    #[test]
    fn expiry_check_transitions_once_and_is_idempotent() {
        let mut view = view_with(detail(Duration::seconds(-10)));
        assert!(view.controls.enabled);

        // 첫 체크에서 만료 표시로 전환
        assert!(view.apply_expiry_check(Utc::now()));
        assert!(!view.controls.enabled);
        assert_eq!(view.controls.button_label, "Auction Expired");
        let rendered = view.render(Utc::now());
        assert!(rendered.contains("Status: EXPIRED"));
        assert!(rendered.contains("[Auction Expired] (disabled)"));

        // 두 번째 체크는 아무것도 바꾸지 않는다
        assert!(!view.apply_expiry_check(Utc::now()));
        assert_eq!(view.render(Utc::now()), rendered);
    }

    #[test]
    fn expiry_check_leaves_live_auction_alone() {
        let mut view = view_with(detail(Duration::hours(1)));
        assert!(!view.apply_expiry_check(Utc::now()));
        assert!(view.controls.enabled);
        assert!(view.render(Utc::now()).contains("Status: ACTIVE"));
    }

    #[test]
    fn render_shows_winner_marker_for_own_bid() {
        let mut auction = detail(Duration::hours(1));
        auction.lowest_unique_bid = Some(LowestUniqueBid {
            bid_id: 9,
            user_id: 3,
            username: "mina".to_string(),
            is_users_bid: true,
        });
        let view = view_with(auction);
        let rendered = view.render(Utc::now());
        assert!(rendered.contains("Current Winner: mina * You"));
    }

    #[test]
    fn render_sorts_bid_history_newest_first_with_badges() {
        let now = Utc::now();
        let mut auction = detail(Duration::hours(1));
        auction.bids = vec![
            BidRecord {
                id: 1,
                user_id: 3,
                amount: 4.0,
                is_unique: true,
                is_winner: false,
                created_at: now - Duration::minutes(10),
            },
            BidRecord {
                id: 2,
                user_id: 3,
                amount: 7.5,
                is_unique: false,
                is_winner: false,
                created_at: now - Duration::minutes(1),
            },
        ];
        let view = view_with(auction);
        let rendered = view.render(Utc::now());

        let newest = rendered.find("$7.5").unwrap();
        let oldest = rendered.find("$4 ").unwrap();
        assert!(newest < oldest);
        assert!(rendered.contains("[Not Unique]"));
        assert!(rendered.contains("[Unique]"));
    }

    #[test]
    fn render_pool_info_with_threshold_and_winners() {
        let pool_info = PoolInfo {
            auction_id: 1,
            item_value: Some(100.0),
            pool_prize: 42.5,
            pool_distributed: true,
            top_bidders: vec![PoolTopBidder {
                user_id: 3,
                username: "mina".to_string(),
                bid_count: 4,
                rank: 1,
                potential_percentage: 60.0,
                potential_amount: 25.5,
            }],
            winners: vec![PoolWinner {
                user_id: 3,
                username: "mina".to_string(),
                rank: 1,
                percentage: 60.0,
                amount: 25.5,
            }],
        };
        let rendered = render_pool_info(&pool_info);
        assert!(rendered.contains("Item Value Threshold: $100.00"));
        assert!(rendered.contains("Current Pool Prize: $42.50"));
        assert!(rendered.contains("Top 1: mina (4 bids) 60% $25.50"));
        assert!(rendered.contains("Rank 1: mina 60% $25.50"));
    }

    #[test]
    fn render_pool_info_without_bidders_shows_placeholder() {
        let pool_info = PoolInfo {
            auction_id: 1,
            item_value: None,
            pool_prize: 0.0,
            pool_distributed: false,
            top_bidders: Vec::new(),
            winners: Vec::new(),
        };
        let rendered = render_pool_info(&pool_info);
        assert!(rendered.contains("No potential winners yet"));
        assert!(!rendered.contains("Item Value Threshold"));
    }
}
