/// 클라이언트 설정
/// API 주소, 토큰 파일 경로, 주기 작업 간격을 환경 변수에서 로드한다.
// region:    --- Imports
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

// endregion: --- Imports

// region:    --- Config

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_LISTING_REFRESH_SECS: u64 = 30;
const DEFAULT_EXPIRY_CHECK_SECS: u64 = 1;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub token_path: PathBuf,
    pub listing_refresh: Duration,
    pub expiry_check: Duration,
}

impl Config {
    /// 환경 변수에서 설정 로드. 값이 없거나 잘못되면 기본값을 쓴다.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            token_path: std::env::var("AUCTION_TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_token_path()),
            listing_refresh: Duration::from_secs(load_secs(
                "LISTING_REFRESH_SECS",
                DEFAULT_LISTING_REFRESH_SECS,
            )),
            expiry_check: Duration::from_secs(load_secs(
                "EXPIRY_CHECK_SECS",
                DEFAULT_EXPIRY_CHECK_SECS,
            )),
        }
    }
}

fn default_token_path() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".auction-client").join("token"),
        Err(_) => PathBuf::from(".auction-client-token"),
    }
}

fn load_secs(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("{:<12} --> {} 값이 잘못되어 기본값 사용: {}", "Config", key, e);
            default
        }),
        Err(_) => default,
    }
}

// endregion: --- Config
