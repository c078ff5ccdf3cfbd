/// 주기 작업 스케줄러
/// 1. 경매 목록 주기 갱신
/// 2. 상세 뷰 만료 감시 (1초 주기)
/// 태스크는 가드 객체가 소유하며, 가드가 드롭되면 태스크를 중단해
/// 화면 이탈 후의 잔류 갱신을 막는다.
// region:    --- Imports
use crate::api::AuctionApi;
use crate::views::detail::DetailView;
use crate::views::listing;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, error, info};

// endregion: --- Imports

// region:    --- Task Guard

/// 스케줄 태스크 가드
pub struct TaskGuard {
    handle: JoinHandle<()>,
}

impl TaskGuard {
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// endregion: --- Task Guard

// region:    --- Listing Refresher

/// 경매 목록 주기 갱신. 한 사이클은 조회 후 렌더 순서로 돌고,
/// 실패한 사이클은 로그만 남기고 다음 틱을 기다린다(자동 재시도 없음).
pub struct ListingRefresher<A> {
    api: Arc<A>,
    period: Duration,
}

impl<A: AuctionApi + Send + Sync + 'static> ListingRefresher<A> {
    pub fn new(api: Arc<A>, period: Duration) -> Self {
        Self { api, period }
    }

    /// 갱신 태스크 시작. 첫 틱은 즉시 발화한다.
    pub fn start(self) -> TaskGuard {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(self.period);
            loop {
                ticker.tick().await;
                match self.api.list_auctions().await {
                    Ok(auctions) => {
                        debug!("{:<12} --> 경매 목록 갱신: {}건", "Scheduler", auctions.len());
                        println!("{}", listing::render_listing(&auctions, Utc::now()));
                    }
                    Err(e) => {
                        error!("{:<12} --> 경매 목록 갱신 실패: {}", "Scheduler", e);
                        println!("Failed to load auctions");
                    }
                }
            }
        });
        TaskGuard { handle }
    }
}

// endregion: --- Listing Refresher

// region:    --- Expiry Watchdog

/// 만료 감시: 벽시계와 저장된 만료 시각을 주기 비교한다.
/// 체크 자체는 멱등이라 전환 이후의 틱은 아무것도 출력하지 않는다.
pub struct ExpiryWatchdog {
    view: Arc<Mutex<DetailView>>,
    period: Duration,
}

impl ExpiryWatchdog {
    pub fn new(view: Arc<Mutex<DetailView>>, period: Duration) -> Self {
        Self { view, period }
    }

    /// 감시 태스크 시작
    pub fn start(self) -> TaskGuard {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(self.period);
            loop {
                ticker.tick().await;
                let mut view = self.view.lock().await;
                if view.apply_expiry_check(Utc::now()) {
                    info!("{:<12} --> 만료 표시 전환", "Watchdog");
                    println!("{}", view.render(Utc::now()));
                }
            }
        });
        TaskGuard { handle }
    }
}

// endregion: --- Expiry Watchdog

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::model::AuctionDetail;
    use chrono::Duration as ChronoDuration;

    fn expired_view() -> DetailView {
        let mut view = DetailView::new(1);
        view.auction = Some(AuctionDetail {
            id: 1,
            title: "Old lamp".to_string(),
            description: String::new(),
            starting_price: 1.0,
            status: "active".to_string(),
            created_at: Utc::now(),
            expires_at: Utc::now() - ChronoDuration::seconds(2),
            winner_id: None,
            creator_id: 1,
            bids: Vec::new(),
            lowest_unique_bid: None,
        });
        view
    }

    #[tokio::test]
    async fn watchdog_marks_view_expired_within_one_period() {
        let view = Arc::new(Mutex::new(expired_view()));
        let guard = ExpiryWatchdog::new(Arc::clone(&view), Duration::from_millis(10)).start();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(view.lock().await.is_expired_displayed());
        guard.cancel();
    }

    #[tokio::test]
    async fn guard_drop_aborts_the_task() {
        let view = Arc::new(Mutex::new(DetailView::new(1)));
        {
            let _guard = ExpiryWatchdog::new(Arc::clone(&view), Duration::from_millis(10)).start();
        }
        // 가드가 드롭된 뒤에는 뷰를 잡는 태스크가 없어야 한다
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(Arc::strong_count(&view), 1);
    }
}
