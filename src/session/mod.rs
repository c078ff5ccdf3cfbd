/// 세션 토큰 저장소
/// 브라우저 localStorage 의 토큰 항목에 해당한다. 토큰 파일 하나만 관리하며,
/// 재시작 후에도 유지되고 명시적인 로그아웃에서만 지워진다.
// region:    --- Imports
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Session Store

/// 보호된 뷰 진입 판정. 토큰 부재는 오류가 아니라 비로그인 상태다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthGate {
    Token(String),
    RedirectToLogin,
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 저장된 토큰 로드. 없으면 None
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("{:<12} --> 토큰 파일 읽기 실패: {}", "Session", e);
                None
            }
        }
    }

    /// 토큰 저장 (로그인 성공 시에만 호출된다)
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        info!("{:<12} --> 세션 토큰 저장", "Session");
        Ok(())
    }

    /// 토큰 제거 (로그아웃)
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("{:<12} --> 세션 토큰 제거", "Session");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// 보호된 뷰 진입용 게이트. 토큰 유효성 검증은 서버의 몫이다.
    pub fn gate(&self) -> AuthGate {
        match self.load() {
            Some(token) => AuthGate::Token(token),
            None => AuthGate::RedirectToLogin,
        }
    }
}

// endregion: --- Session Store
