//! 초성 퀴즈: 숨긴 단어의 초성만 보여주고 정답을 맞히게 한다

use crate::core::extract_initial_consonant;

/// 답안 채점 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// 정답 (이번에 처음 맞힘)
    Correct,
    /// 오답
    Incorrect,
    /// 이미 맞힌 문제 (보상 중복 방지)
    AlreadySolved,
}

/// 초성 퀴즈 한 문제
#[derive(Debug, Clone)]
pub struct ChosungQuiz {
    answer: String,
    hint: String,
    attempts: u32,
    solved: bool,
}

impl ChosungQuiz {
    pub fn new(answer: impl Into<String>) -> Self {
        let answer = answer.into().trim().to_string();
        let hint = extract_initial_consonant(&answer);
        Self {
            answer,
            hint,
            attempts: 0,
            solved: false,
        }
    }

    /// 화면에 보여줄 초성 힌트
    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// 채점한 횟수 (이미 맞힌 뒤의 입력은 세지 않음)
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// 답안 채점 (앞뒤 공백 무시)
    pub fn check(&mut self, guess: &str) -> QuizOutcome {
        if self.solved {
            return QuizOutcome::AlreadySolved;
        }
        self.attempts += 1;
        if guess.trim() == self.answer {
            self.solved = true;
            log::debug!("초성 퀴즈 정답: {} ({}회)", self.answer, self.attempts);
            QuizOutcome::Correct
        } else {
            QuizOutcome::Incorrect
        }
    }
}
