/// CLI 정의
/// 원래 웹 화면 단위가 서브커맨드 하나씩에 대응한다.
// region:    --- Imports
use structopt::StructOpt;

// endregion: --- Imports

// region:    --- Command

#[derive(Debug, StructOpt)]
#[structopt(name = "auction-client", about = "Unique lowest bid auction client")]
pub enum Command {
    /// 경매 목록 1회 조회
    Auctions,
    /// 경매 목록 주기 갱신 (Ctrl-C 로 종료)
    Watch,
    /// 경매 상세 조회
    Show {
        auction_id: i64,
        /// 만료 감시를 켜고 화면을 유지한다
        #[structopt(long)]
        follow: bool,
    },
    /// 입찰
    Bid { auction_id: i64, amount: String },
    /// 지갑 잔액 조회
    Wallet,
    /// 로그인
    Login { email: String, password: String },
    /// 회원 가입
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// 로그아웃
    Logout,
}

// endregion: --- Command
