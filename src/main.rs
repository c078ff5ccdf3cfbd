// region:    --- Imports
use auction_client::api::{ApiManager, AuctionApi};
use auction_client::auth::{AuthController, AuthOutcome};
use auction_client::bidding::{BidSubmission, SubmissionState};
use auction_client::cli::Command;
use auction_client::config::Config;
use auction_client::scheduler::{ExpiryWatchdog, ListingRefresher};
use auction_client::session::{AuthGate, SessionStore};
use auction_client::views::detail::DetailView;
use auction_client::views::listing;
use auction_client::views::wallet::WalletView;
use chrono::Utc;
use std::sync::Arc;
use structopt::StructOpt;
use tokio::sync::Mutex;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = Config::from_env();
    let command = Command::from_args();

    let api = ApiManager::new(config.api_url.clone());
    let session = SessionStore::new(config.token_path.clone());
    info!("{:<12} --> API: {}", "Main", config.api_url);

    match command {
        Command::Auctions => match api.list_auctions().await {
            Ok(auctions) => println!("{}", listing::render_listing(&auctions, Utc::now())),
            Err(e) => {
                error!("{:<12} --> 경매 목록 조회 실패: {}", "Main", e);
                println!("Failed to load auctions");
            }
        },

        Command::Watch => {
            let refresher = ListingRefresher::new(Arc::new(api), config.listing_refresh);
            let guard = refresher.start();
            tokio::signal::ctrl_c().await?;
            guard.cancel();
        }

        Command::Show { auction_id, follow } => {
            let token = match session.gate() {
                AuthGate::Token(token) => token,
                AuthGate::RedirectToLogin => {
                    println!("Please login to view auction details");
                    return Ok(());
                }
            };

            let mut view = DetailView::new(auction_id);
            if let Err(e) = view.load(&api, &token).await {
                error!("{:<12} --> 상세 조회 실패: {}", "Main", e);
                println!("Failed to load auction details");
                return Ok(());
            }
            println!("{}", view.render(Utc::now()));

            if follow {
                let shared = Arc::new(Mutex::new(view));
                let guard =
                    ExpiryWatchdog::new(Arc::clone(&shared), config.expiry_check).start();
                tokio::signal::ctrl_c().await?;
                guard.cancel();
            }
        }

        Command::Bid { auction_id, amount } => {
            let token = match session.gate() {
                AuthGate::Token(token) => token,
                AuthGate::RedirectToLogin => {
                    println!("Please login to place a bid");
                    return Ok(());
                }
            };

            let mut view = DetailView::new(auction_id);
            if let Err(e) = view.load(&api, &token).await {
                error!("{:<12} --> 상세 조회 실패: {}", "Main", e);
                println!("Failed to load auction details");
                return Ok(());
            }

            let mut wallet = WalletView::new();
            let mut submission = BidSubmission::new();
            let report = submission
                .submit(&api, &token, &mut view, &mut wallet, &amount)
                .await;
            println!("{}", report.message);

            if report.state == SubmissionState::Succeeded {
                println!("{}", wallet.render());
                println!("{}", view.render(Utc::now()));
            }
        }

        Command::Wallet => {
            let token = match session.gate() {
                AuthGate::Token(token) => token,
                AuthGate::RedirectToLogin => {
                    println!("Please login to view your wallet");
                    return Ok(());
                }
            };

            let mut wallet = WalletView::new();
            match wallet.refresh(&api, &token).await {
                Ok(()) => println!("{}", wallet.render()),
                Err(e) => {
                    error!("{:<12} --> 지갑 조회 실패: {}", "Main", e);
                    println!("Failed to load wallet balance");
                }
            }
        }

        Command::Login { email, password } => {
            let controller = AuthController::new(&api, &session);
            match controller.login(&email, &password).await {
                AuthOutcome::NavigateHome => println!("Login successful"),
                AuthOutcome::PromptLogin(message) | AuthOutcome::Failure(message) => {
                    println!("{}", message)
                }
            }
        }

        Command::Register {
            username,
            email,
            password,
        } => {
            let controller = AuthController::new(&api, &session);
            match controller.register(&username, &email, &password).await {
                AuthOutcome::NavigateHome => println!("Registration successful"),
                AuthOutcome::PromptLogin(message) | AuthOutcome::Failure(message) => {
                    println!("{}", message)
                }
            }
        }

        Command::Logout => {
            let controller = AuthController::new(&api, &session);
            controller.logout();
            println!("Logged out");
        }
    }

    Ok(())
}
// endregion: --- Main
