//! 받침 빼고 읽기 연습

use thiserror::Error;

use crate::core::{count_final_consonants, strip_final_consonant};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    /// 입력이 비어 있거나 공백뿐
    #[error("연습할 문장을 입력하세요")]
    EmptyInput,
}

/// 원문과 받침을 뺀 연습 문장
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchimDrill {
    original: String,
    practice: String,
}

impl BatchimDrill {
    pub fn new(text: &str) -> Result<Self, DrillError> {
        if text.trim().is_empty() {
            return Err(DrillError::EmptyInput);
        }
        Ok(Self {
            original: text.to_string(),
            practice: strip_final_consonant(text),
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn practice(&self) -> &str {
        &self.practice
    }

    /// 제거된 받침 수
    pub fn removed_count(&self) -> usize {
        count_final_consonants(&self.original)
    }
}
