/// 인증 컨트롤러
/// 로그인/가입/로그아웃과 토큰 유무에 따른 UI 분기. 토큰 유효성은
/// 서버만 판정하며 클라이언트는 존재 여부만 본다.
// region:    --- Imports
use crate::api::{ApiError, AuctionApi};
use crate::auction::model::{LoginRequest, RegisterRequest};
use crate::session::SessionStore;
use tracing::{error, info};

// endregion: --- Imports

// region:    --- Auth Controller

/// 인증 동작의 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// 랜딩 화면으로 이동
    NavigateHome,
    /// 가입 성공: 별도 로그인 안내 (자동 로그인은 하지 않는다)
    PromptLogin(String),
    /// 실패 메시지 표시. 토큰은 건드리지 않는다.
    Failure(String),
}

/// 토큰 유무에 따른 인증 UI 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAffordance {
    Logout,
    LoginRegister,
}

pub fn auth_affordance(session: &SessionStore) -> AuthAffordance {
    match session.load() {
        Some(_) => AuthAffordance::Logout,
        None => AuthAffordance::LoginRegister,
    }
}

pub struct AuthController<'a, A> {
    api: &'a A,
    session: &'a SessionStore,
}

impl<'a, A: AuctionApi + Sync> AuthController<'a, A> {
    pub fn new(api: &'a A, session: &'a SessionStore) -> Self {
        Self { api, session }
    }

    /// 로그인: 성공 시 토큰 저장 후 랜딩으로, 실패 시 서버 메시지 또는 대체 문구
    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        info!("{:<12} --> 로그인 시도: {}", "Auth", email);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&request).await {
            Ok(response) => {
                if let Err(e) = self.session.save(&response.token) {
                    error!("{:<12} --> 토큰 저장 실패: {}", "Auth", e);
                    return AuthOutcome::Failure("Login failed. Please try again.".to_string());
                }
                AuthOutcome::NavigateHome
            }
            Err(ApiError::Api { message, .. }) => AuthOutcome::Failure(message),
            Err(e) => {
                error!("{:<12} --> 로그인 전송 실패: {}", "Auth", e);
                AuthOutcome::Failure("Login failed. Please try again.".to_string())
            }
        }
    }

    /// 가입: 성공해도 토큰을 만들지 않고 로그인 안내만 한다
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AuthOutcome {
        info!("{:<12} --> 가입 시도: {}", "Auth", username);
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.register(&request).await {
            Ok(_) => AuthOutcome::PromptLogin("Registration successful! Please login.".to_string()),
            Err(ApiError::Api { message, .. }) => {
                AuthOutcome::Failure(format!("Registration failed: {}", message))
            }
            Err(e) => {
                error!("{:<12} --> 가입 전송 실패: {}", "Auth", e);
                AuthOutcome::Failure("Registration failed. Please try again.".to_string())
            }
        }
    }

    /// 로그아웃: 토큰 제거 후 랜딩으로
    pub fn logout(&self) -> AuthOutcome {
        if let Err(e) = self.session.clear() {
            error!("{:<12} --> 토큰 제거 실패: {}", "Auth", e);
        }
        AuthOutcome::NavigateHome
    }
}

// endregion: --- Auth Controller
