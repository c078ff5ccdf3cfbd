/// 입찰 제출 플로우
/// 시도당 상태 머신: Idle → Validating → Submitting → {Succeeded, Failed}.
/// 성공 시 지갑과 상세 뷰를 서버에서 다시 조회한다. 유니크 여부와 풀 효과는
/// 서버 계산이므로 로컬 산술로 추정 갱신하지 않는다.
// region:    --- Imports
use crate::api::AuctionApi;
use crate::auction::model::PlaceBidRequest;
use crate::views::detail::DetailView;
use crate::views::wallet::WalletView;
use chrono::{DateTime, Utc};
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Validation

/// 검증 오류. 첫 위반 규칙에서 즉시 중단한다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BidValidationError {
    #[error("Invalid auction ID")]
    MissingAuctionId,
    #[error("Please enter a valid positive bid amount")]
    InvalidAmount,
    #[error("This auction has expired")]
    AuctionExpired,
    #[error("Please enter a whole number or a number with at most one decimal place")]
    TooManyDecimals,
}

/// 입찰 검증: 경매 식별자, 양의 유한 금액, 만료 전, 소수 첫째 자리까지.
/// 만료는 클라이언트 사전 검사일 뿐이며 서버가 다시 판정한다.
pub fn validate_bid(
    auction_id: Option<i64>,
    raw_amount: &str,
    expires_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(i64, f64), BidValidationError> {
    let auction_id = auction_id.ok_or(BidValidationError::MissingAuctionId)?;

    let raw_amount = raw_amount.trim();
    let amount: f64 = raw_amount
        .parse()
        .map_err(|_| BidValidationError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BidValidationError::InvalidAmount);
    }

    if let Some(expires_at) = expires_at {
        if expires_at < now {
            return Err(BidValidationError::AuctionExpired);
        }
    }

    // 자릿수 검사는 입력 문자열 기준 (부동소수점 표현 오차 회피)
    if !at_most_one_decimal(raw_amount) {
        return Err(BidValidationError::TooManyDecimals);
    }

    Ok((auction_id, amount))
}

fn at_most_one_decimal(raw: &str) -> bool {
    match raw.split_once('.') {
        Some((_, fraction)) => fraction.trim_end_matches('0').len() <= 1,
        None => true,
    }
}

// endregion: --- Validation

// region:    --- Submission

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// 제출 결과: 사용자에게 보여줄 메시지 하나와 최종 상태
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub state: SubmissionState,
    pub message: String,
}

pub struct BidSubmission {
    state: SubmissionState,
}

impl BidSubmission {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// 입찰 제출. 실패 시 부분 상태를 남기지 않으며 자동 재시도도 없다.
    pub async fn submit<A: AuctionApi + Sync>(
        &mut self,
        api: &A,
        token: &str,
        view: &mut DetailView,
        wallet: &mut WalletView,
        raw_amount: &str,
    ) -> SubmissionReport {
        self.state = SubmissionState::Validating;
        let now = Utc::now();
        let (auction_id, amount) =
            match validate_bid(Some(view.auction_id), raw_amount, view.expires_at(), now) {
                Ok(validated) => validated,
                Err(e) => {
                    self.state = SubmissionState::Failed;
                    return SubmissionReport {
                        state: self.state,
                        message: e.to_string(),
                    };
                }
            };

        self.state = SubmissionState::Submitting;
        let request = PlaceBidRequest { auction_id, amount };
        match api.place_bid(token, &request).await {
            Ok(response) => {
                info!("{:<12} --> 입찰 성공 id: {}", "Bid", response.bid_id);

                // 서버가 계산한 사후 상태를 다시 조회한다
                if let Err(e) = wallet.refresh(api, token).await {
                    error!("{:<12} --> 입찰 후 지갑 갱신 실패: {}", "Bid", e);
                }
                if let Err(e) = view.load(api, token).await {
                    error!("{:<12} --> 입찰 후 상세 갱신 실패: {}", "Bid", e);
                }

                self.state = SubmissionState::Succeeded;
                SubmissionReport {
                    state: self.state,
                    message: response.message,
                }
            }
            Err(e) => {
                error!("{:<12} --> 입찰 실패: {}", "Bid", e);
                self.state = SubmissionState::Failed;
                SubmissionReport {
                    state: self.state,
                    message: e.to_string(),
                }
            }
        }
    }
}

impl Default for BidSubmission {
    fn default() -> Self {
        Self::new()
    }
}

// endregion: --- Submission

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn future() -> Option<DateTime<Utc>> {
        Some(Utc::now() + Duration::hours(1))
    }

    #[test]
    fn rejects_missing_auction_id_first() {
        let result = validate_bid(None, "12.5", future(), Utc::now());
        assert_eq!(result, Err(BidValidationError::MissingAuctionId));
    }

    #[test]
    fn rejects_non_positive_and_unparsable_amounts() {
        let now = Utc::now();
        for raw in ["0", "-5", "NaN", "abc", ""] {
            assert_eq!(
                validate_bid(Some(1), raw, future(), now),
                Err(BidValidationError::InvalidAmount),
                "amount {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn rejects_expired_auction_before_decimal_check() {
        let now = Utc::now();
        let past = Some(now - Duration::seconds(1));
        assert_eq!(
            validate_bid(Some(1), "12.345", past, now),
            Err(BidValidationError::AuctionExpired)
        );
    }

    #[test]
    fn rejects_more_than_one_decimal_place() {
        assert_eq!(
            validate_bid(Some(1), "12.345", future(), Utc::now()),
            Err(BidValidationError::TooManyDecimals)
        );
        assert_eq!(
            validate_bid(Some(1), "0.25", future(), Utc::now()),
            Err(BidValidationError::TooManyDecimals)
        );
    }

    #[test]
    fn accepts_whole_and_single_decimal_amounts() {
        let now = Utc::now();
        assert_eq!(validate_bid(Some(1), "12", future(), now), Ok((1, 12.0)));
        assert_eq!(validate_bid(Some(1), "12.5", future(), now), Ok((1, 12.5)));
        // 후행 0 은 자릿수에 들어가지 않는다
        assert_eq!(validate_bid(Some(1), "12.50", future(), now), Ok((1, 12.5)));
    }

    #[test]
    fn missing_expiry_defers_to_server() {
        // 만료 시각을 모르면 사전 검사를 건너뛰고 서버 판정에 맡긴다
        assert_eq!(validate_bid(Some(1), "3", None, Utc::now()), Ok((1, 3.0)));
    }
}
