//! 한글 음절 분해/조합과 그 위의 텍스트 변환

pub mod transform;
pub mod unicode;

pub use transform::{
    count_final_consonants, disassemble, extract_initial_consonant, strip_final_consonant,
};
pub use unicode::{compose_syllable, decompose, recompose, SyllableParts};
