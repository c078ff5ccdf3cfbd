use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 경매 목록 항목 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub starting_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub winner_id: Option<i64>,
    pub creator_id: i64,
    #[serde(default)]
    pub creator_username: Option<String>,
    #[serde(default)]
    pub item_value: Option<f64>,
}

// 경매 상세 모델 (bids 는 조회한 사용자 본인의 입찰만 담긴다)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub starting_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub winner_id: Option<i64>,
    pub creator_id: i64,
    #[serde(default)]
    pub bids: Vec<BidRecord>,
    #[serde(default)]
    pub lowest_unique_bid: Option<LowestUniqueBid>,
}

// 본인 입찰 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidRecord {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub is_unique: bool,
    pub is_winner: bool,
    pub created_at: DateTime<Utc>,
}

// 전체 입찰 모델 (집계/차트용, 익명일 수 있다)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionBid {
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
}

// 현재 유니크 최저가 입찰자
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowestUniqueBid {
    pub bid_id: i64,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub is_users_bid: bool,
}

// 풀 상금 정보 (서버 계산 결과를 그대로 표시한다)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolInfo {
    pub auction_id: i64,
    #[serde(default)]
    pub item_value: Option<f64>,
    pub pool_prize: f64,
    pub pool_distributed: bool,
    #[serde(default)]
    pub top_bidders: Vec<PoolTopBidder>,
    #[serde(default)]
    pub winners: Vec<PoolWinner>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolTopBidder {
    pub user_id: i64,
    pub username: String,
    pub bid_count: i64,
    pub rank: i64,
    pub potential_percentage: f64,
    pub potential_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolWinner {
    pub user_id: i64,
    pub username: String,
    pub rank: i64,
    pub percentage: f64,
    pub amount: f64,
}

// 지갑 잔액 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    pub balance: f64,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// 입찰 요청 모델 (서버 규약상 auctionId 만 camelCase)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceBidRequest {
    #[serde(rename = "auctionId")]
    pub auction_id: i64,
    pub amount: f64,
}

// 입찰 응답 모델. 표시 용도로만 쓰고 상태 갱신에는 쓰지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceBidResponse {
    pub message: String,
    pub bid_id: i64,
    pub new_balance: f64,
    pub is_winner: bool,
    #[serde(default)]
    pub pool_contribution: Option<f64>,
    #[serde(default)]
    pub current_pool: Option<f64>,
}

// 인증 요청/응답 모델
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// 표시용 상태 판정: 만료 시각이 지났으면 서버 상태와 무관하게 "expired".
/// 서버 상태를 바꾸는 것이 아니라 화면 표기만 바꾼다.
pub fn effective_status<'a>(
    status: &'a str,
    expires_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> &'a str {
    if now > expires_at {
        "expired"
    } else {
        status
    }
}

impl AuctionSummary {
    pub fn effective_status(&self, now: DateTime<Utc>) -> &str {
        effective_status(&self.status, self.expires_at, now)
    }
}

impl AuctionDetail {
    pub fn effective_status(&self, now: DateTime<Utc>) -> &str {
        effective_status(&self.status, self.expires_at, now)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at || self.status == "expired"
    }
}
