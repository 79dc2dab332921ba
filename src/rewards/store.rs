//! 프로필 저장소 (외부 백엔드 경계)

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 사용자 프로필 행
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub coins: u64,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("백엔드 요청 실패: {0}")]
    Backend(String),
    #[error("저장소 잠금 실패")]
    Poisoned,
}

/// 프로필 행을 읽고 쓰는 백엔드
///
/// 행이 없으면 `Ok(None)`이며 오류로 보지 않는다.
pub trait ProfileStore {
    fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError>;
    fn update_coins(&self, user_id: &str, coins: u64) -> Result<(), StoreError>;
}

/// 메모리 저장소 (CLI, 테스트용)
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    rows: Mutex<HashMap<String, Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 프로필 행 추가 (백엔드 가입 트리거 역할)
    pub fn insert(&self, profile: Profile) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().map_err(|_| StoreError::Poisoned)?;
        rows.insert(profile.id.clone(), profile);
        Ok(())
    }
}

impl ProfileStore for MemoryProfileStore {
    fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let rows = self.rows.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(rows.get(user_id).cloned())
    }

    fn update_coins(&self, user_id: &str, coins: u64) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().map_err(|_| StoreError::Poisoned)?;
        match rows.get_mut(user_id) {
            Some(profile) => {
                profile.coins = coins;
                Ok(())
            }
            None => Err(StoreError::Backend(format!("프로필 없음: {}", user_id))),
        }
    }
}
