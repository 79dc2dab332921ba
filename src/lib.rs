pub mod config;
pub mod core;
pub mod games;
pub mod i18n;
pub mod nav;
pub mod rewards;
pub mod season;

pub use crate::core::{disassemble, extract_initial_consonant, strip_final_consonant};
pub use games::{BatchimDrill, ChosungQuiz, QuizOutcome};
pub use rewards::{CoinWallet, MemoryProfileStore, ProfileStore, Session};
