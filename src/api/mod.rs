/// 경매 API 클라이언트
/// 서버가 유일한 권위다. 클라이언트는 결과를 조회해 표시할 뿐 재시도나
/// 타임아웃을 추가하지 않는다.
// region:    --- Imports
use crate::auction::model::{
    ApiMessage, AuctionBid, AuctionDetail, AuctionSummary, LoginRequest, PlaceBidRequest,
    PlaceBidResponse, PoolInfo, RegisterRequest, TokenResponse, WalletBalance,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::info;

// endregion: --- Imports

// region:    --- Api Error

/// API 호출 오류
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

// endregion: --- Api Error

// region:    --- Api Trait

/// 경매 API 트레이트. 뷰 컨트롤러와 입찰 플로우가 이 시임을 통해
/// 실제 클라이언트 또는 테스트용 페이크와 대화한다.
#[async_trait]
pub trait AuctionApi {
    async fn list_auctions(&self) -> Result<Vec<AuctionSummary>, ApiError>;
    async fn get_auction(&self, token: &str, auction_id: i64) -> Result<AuctionDetail, ApiError>;
    async fn get_auction_bids(
        &self,
        token: &str,
        auction_id: i64,
    ) -> Result<Vec<AuctionBid>, ApiError>;
    async fn get_pool_info(&self, token: &str, auction_id: i64) -> Result<PoolInfo, ApiError>;
    async fn place_bid(
        &self,
        token: &str,
        request: &PlaceBidRequest,
    ) -> Result<PlaceBidResponse, ApiError>;
    async fn get_wallet(&self, token: &str) -> Result<WalletBalance, ApiError>;
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError>;
}

// endregion: --- Api Trait

// region:    --- Api Manager

/// reqwest 기반 API 매니저
pub struct ApiManager {
    client: Client,
    base_url: String,
}

impl ApiManager {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 요청 실행 및 응답 해석. 실패 상태면 서버의 message 를 꺼내고,
    /// 본문이 없으면 상태 코드로 대체 메시지를 만든다.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let message = response
                .json::<ApiMessage>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("request failed (HTTP {})", status.as_u16()));
            Err(ApiError::Api { status, message })
        }
    }
}

#[async_trait]
impl AuctionApi for ApiManager {
    async fn list_auctions(&self) -> Result<Vec<AuctionSummary>, ApiError> {
        info!("{:<12} --> 경매 목록 조회", "Api");
        self.execute(self.client.get(self.url("/auctions/"))).await
    }

    async fn get_auction(&self, token: &str, auction_id: i64) -> Result<AuctionDetail, ApiError> {
        info!("{:<12} --> 경매 상세 조회 id: {}", "Api", auction_id);
        self.execute(
            self.client
                .get(self.url(&format!("/auctions/{}", auction_id)))
                .bearer_auth(token),
        )
        .await
    }

    async fn get_auction_bids(
        &self,
        token: &str,
        auction_id: i64,
    ) -> Result<Vec<AuctionBid>, ApiError> {
        info!("{:<12} --> 전체 입찰 조회 id: {}", "Api", auction_id);
        self.execute(
            self.client
                .get(self.url(&format!("/auctions/{}/bids", auction_id)))
                .bearer_auth(token),
        )
        .await
    }

    async fn get_pool_info(&self, token: &str, auction_id: i64) -> Result<PoolInfo, ApiError> {
        info!("{:<12} --> 풀 상금 조회 id: {}", "Api", auction_id);
        self.execute(
            self.client
                .get(self.url(&format!("/auctions/{}/pool", auction_id)))
                .bearer_auth(token),
        )
        .await
    }

    async fn place_bid(
        &self,
        token: &str,
        request: &PlaceBidRequest,
    ) -> Result<PlaceBidResponse, ApiError> {
        info!(
            "{:<12} --> 입찰 요청 id: {} 금액: {}",
            "Api", request.auction_id, request.amount
        );
        self.execute(
            self.client
                .post(self.url("/bids/"))
                .bearer_auth(token)
                .json(request),
        )
        .await
    }

    async fn get_wallet(&self, token: &str) -> Result<WalletBalance, ApiError> {
        info!("{:<12} --> 지갑 잔액 조회", "Api");
        self.execute(self.client.get(self.url("/wallet/")).bearer_auth(token))
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        info!("{:<12} --> 로그인 요청", "Api");
        self.execute(self.client.post(self.url("/auth/login")).json(request))
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
        info!("{:<12} --> 회원 가입 요청", "Api");
        self.execute(self.client.post(self.url("/auth/register")).json(request))
            .await
    }
}

// endregion: --- Api Manager
