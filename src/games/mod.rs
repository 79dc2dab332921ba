//! 한글 미니 게임 (초성 퀴즈, 받침 빼고 읽기)

mod batchim_drill;
mod chosung_quiz;

pub use batchim_drill::{BatchimDrill, DrillError};
pub use chosung_quiz::{ChosungQuiz, QuizOutcome};
