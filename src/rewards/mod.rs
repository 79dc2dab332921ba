//! 코인 보상: 로그인 사용자 프로필에 저장되는 잔액

mod store;
mod wallet;

pub use store::{MemoryProfileStore, Profile, ProfileStore, StoreError};
pub use wallet::{CoinWallet, Session, WalletError};
