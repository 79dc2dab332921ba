//! 로그인 사용자의 코인 잔액

use thiserror::Error;

use super::store::{Profile, ProfileStore, StoreError};

/// 인증 서비스가 넘겨주는 로그인 세션
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WalletError {
    /// 로그인하지 않았거나 프로필을 아직 못 읽음
    #[error("코인을 저장하려면 로그인하세요")]
    NotSignedIn,
    /// 로컬 잔액은 바뀌었지만 저장 실패
    #[error("코인 저장 실패: {0}")]
    Store(#[from] StoreError),
}

/// 코인 지갑
///
/// 세션 상태 변경(`sign_in`/`sign_out`)에 따라 프로필을 읽고 비운다.
pub struct CoinWallet<S: ProfileStore> {
    store: S,
    session: Option<Session>,
    profile: Option<Profile>,
}

impl<S: ProfileStore> CoinWallet<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: None,
            profile: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// 로그인: 프로필 로드 (실패해도 세션은 유지하고 로그만 남김)
    pub fn sign_in(&mut self, session: Session) {
        match self.store.fetch_profile(&session.user_id) {
            Ok(Some(profile)) => {
                log::info!("프로필 로드: {} (코인 {})", profile.id, profile.coins);
                self.profile = Some(profile);
            }
            Ok(None) => {
                log::warn!("프로필 없음: {}", session.user_id);
                self.profile = None;
            }
            Err(e) => {
                log::error!("프로필 로드 실패: {}", e);
                self.profile = None;
            }
        }
        self.session = Some(session);
    }

    /// 로그아웃: 세션과 프로필 초기화 (잔액 0으로 표시)
    pub fn sign_out(&mut self) {
        self.session = None;
        self.profile = None;
    }

    /// 현재 잔액 (프로필 없으면 0)
    pub fn coins(&self) -> u64 {
        self.profile.as_ref().map_or(0, |p| p.coins)
    }

    /// 잔액 설정 (음수는 0으로)
    ///
    /// 로컬 값을 먼저 바꾼 뒤 저장한다. 저장에 실패해도 로컬 값은 유지된다.
    pub fn set_coins(&mut self, value: i64) -> Result<u64, WalletError> {
        let (Some(session), Some(profile)) = (self.session.as_ref(), self.profile.as_mut())
        else {
            return Err(WalletError::NotSignedIn);
        };
        let coins = value.max(0) as u64;
        profile.coins = coins;
        self.store.update_coins(&session.user_id, coins)?;
        log::debug!("코인 저장: {} -> {}", session.user_id, coins);
        Ok(coins)
    }

    fn balance_i64(&self) -> i64 {
        clamp_i64(self.coins())
    }

    /// 코인 획득
    pub fn earn(&mut self, amount: u64) -> Result<u64, WalletError> {
        let next = self.balance_i64().saturating_add(clamp_i64(amount));
        self.set_coins(next)
    }

    /// 코인 사용 (0 미만으로 내려가지 않음)
    pub fn spend(&mut self, amount: u64) -> Result<u64, WalletError> {
        let next = self.balance_i64().saturating_sub(clamp_i64(amount));
        self.set_coins(next)
    }
}

fn clamp_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::MemoryProfileStore;

    fn wallet_with(coins: u64) -> CoinWallet<MemoryProfileStore> {
        let store = MemoryProfileStore::new();
        store
            .insert(Profile {
                id: "u1".into(),
                coins,
            })
            .unwrap();
        let mut wallet = CoinWallet::new(store);
        wallet.sign_in(Session::new("u1"));
        wallet
    }

    #[test]
    fn test_signed_out_cannot_save() {
        let mut wallet = CoinWallet::new(MemoryProfileStore::new());
        assert_eq!(wallet.coins(), 0);
        assert!(matches!(wallet.earn(1), Err(WalletError::NotSignedIn)));
    }

    #[test]
    fn test_signed_in_without_profile() {
        let mut wallet = CoinWallet::new(MemoryProfileStore::new());
        wallet.sign_in(Session::new("ghost"));
        assert!(wallet.is_signed_in());
        assert!(matches!(wallet.set_coins(5), Err(WalletError::NotSignedIn)));
    }

    #[test]
    fn test_earn_and_spend() {
        let mut wallet = wallet_with(2);
        assert_eq!(wallet.coins(), 2);
        assert_eq!(wallet.earn(1).unwrap(), 3);
        assert_eq!(wallet.spend(1).unwrap(), 2);
        assert_eq!(wallet.store().fetch_profile("u1").unwrap().unwrap().coins, 2);
    }

    #[test]
    fn test_clamped_at_zero() {
        let mut wallet = wallet_with(0);
        assert_eq!(wallet.spend(1).unwrap(), 0);
        assert_eq!(wallet.set_coins(-10).unwrap(), 0);
    }

    #[test]
    fn test_sign_out_resets_balance() {
        let mut wallet = wallet_with(9);
        wallet.sign_out();
        assert!(!wallet.is_signed_in());
        assert_eq!(wallet.coins(), 0);
        // 저장된 값은 그대로
        wallet.sign_in(Session::new("u1"));
        assert_eq!(wallet.coins(), 9);
    }

    struct FailingStore;

    impl ProfileStore for FailingStore {
        fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
            Ok(Some(Profile {
                id: user_id.to_string(),
                coins: 1,
            }))
        }

        fn update_coins(&self, _user_id: &str, _coins: u64) -> Result<(), StoreError> {
            Err(StoreError::Backend("offline".into()))
        }
    }

    #[test]
    fn test_store_failure_keeps_local_value() {
        let mut wallet = CoinWallet::new(FailingStore);
        wallet.sign_in(Session::new("u1"));
        assert!(matches!(wallet.earn(4), Err(WalletError::Store(_))));
        assert_eq!(wallet.coins(), 5);
    }

    /// `broken` 사용자의 프로필 조회만 실패하는 저장소
    struct FetchFailingStore {
        inner: MemoryProfileStore,
        broken: &'static str,
    }

    impl ProfileStore for FetchFailingStore {
        fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
            if user_id == self.broken {
                return Err(StoreError::Backend("timeout".into()));
            }
            self.inner.fetch_profile(user_id)
        }

        fn update_coins(&self, user_id: &str, coins: u64) -> Result<(), StoreError> {
            self.inner.update_coins(user_id, coins)
        }
    }

    fn fetch_failing_wallet() -> CoinWallet<FetchFailingStore> {
        let inner = MemoryProfileStore::new();
        inner
            .insert(Profile {
                id: "u1".into(),
                coins: 7,
            })
            .unwrap();
        inner
            .insert(Profile {
                id: "u2".into(),
                coins: 0,
            })
            .unwrap();
        CoinWallet::new(FetchFailingStore {
            inner,
            broken: "u2",
        })
    }

    #[test]
    fn test_fetch_failure_on_fresh_wallet() {
        let mut wallet = fetch_failing_wallet();
        wallet.sign_in(Session::new("u2"));
        assert!(wallet.is_signed_in());
        assert_eq!(wallet.coins(), 0);
        assert!(matches!(wallet.set_coins(1), Err(WalletError::NotSignedIn)));
    }

    #[test]
    fn test_fetch_failure_drops_previous_profile() {
        let mut wallet = fetch_failing_wallet();
        wallet.sign_in(Session::new("u1"));
        assert_eq!(wallet.coins(), 7);

        // 다른 사용자로 로그인 중 조회 실패: 이전 사용자의 잔액이 남으면 안 됨
        wallet.sign_in(Session::new("u2"));
        assert!(wallet.is_signed_in());
        assert_eq!(wallet.session().map(|s| s.user_id.as_str()), Some("u2"));
        assert_eq!(wallet.coins(), 0);
        assert!(matches!(wallet.set_coins(1), Err(WalletError::NotSignedIn)));

        // u1, u2 행 모두 변경 없음
        assert_eq!(wallet.store().inner.fetch_profile("u1").unwrap().unwrap().coins, 7);
        assert_eq!(wallet.store().inner.fetch_profile("u2").unwrap().unwrap().coins, 0);
    }
}
