/// 지갑 잔액 뷰
/// 잔액은 요청 시마다 새로 조회하며 렌더 한 번 이상 캐시하지 않는다.
// region:    --- Imports
use crate::api::{ApiError, AuctionApi};
use crate::auction::model::WalletBalance;
use tracing::info;

// endregion: --- Imports

// region:    --- Wallet View

#[derive(Default)]
pub struct WalletView {
    pub balance: Option<WalletBalance>,
}

impl WalletView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 잔액 재조회. 잔액을 바꿀 수 있는 동작 뒤에 호출된다.
    pub async fn refresh<A: AuctionApi + Sync>(
        &mut self,
        api: &A,
        token: &str,
    ) -> Result<(), ApiError> {
        info!("{:<12} --> 지갑 잔액 갱신", "Wallet");
        self.balance = Some(api.get_wallet(token).await?);
        Ok(())
    }

    pub fn render(&self) -> String {
        match &self.balance {
            Some(wallet) => format!("Wallet: ${:.2}", wallet.balance),
            None => "Wallet: --".to_string(),
        }
    }
}

// endregion: --- Wallet View
