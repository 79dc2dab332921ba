//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::i18n::Lang;

/// KoreanBridge 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct KoreanBridgeConfig {
    /// UI 언어 코드
    #[serde(default = "default_lang")]
    pub lang: String,
    /// 새 메모리 프로필의 시작 코인
    #[serde(default)]
    pub starting_coins: u64,
    /// 초성 퀴즈 정답 보상
    #[serde(default = "default_quiz_reward")]
    pub quiz_reward: u64,
}

fn default_lang() -> String {
    Lang::En.code().to_string()
}

fn default_quiz_reward() -> u64 {
    1
}

impl Default for KoreanBridgeConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            starting_coins: 0,
            quiz_reward: default_quiz_reward(),
        }
    }
}

impl KoreanBridgeConfig {
    /// 설정된 언어 (모르는 코드는 영어)
    pub fn language(&self) -> Lang {
        Lang::from_code(&self.lang).unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 디렉토리 생성 실패: {0}")]
    CreateDir(std::io::Error),
    #[error("직렬화 실패: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("설정 파일 저장 실패: {0}")]
    Write(std::io::Error),
}

/// 설정 파일 경로: ~/.config/koreanbridge/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("koreanbridge").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KoreanBridgeConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> KoreanBridgeConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            KoreanBridgeConfig::default()
        }),
        Err(_) => KoreanBridgeConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &KoreanBridgeConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &KoreanBridgeConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::CreateDir)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(ConfigError::Write)?;
    Ok(())
}
