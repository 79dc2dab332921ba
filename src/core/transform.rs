//! 음절 분해 결과 위에 만든 텍스트 변환
//!
//! 모든 변환은 문자 단위로 [`decompose`]를 호출하고, 음절이 아니면
//! 원래 문자를 그대로 둔다.

use crate::core::unicode::{
    choseong_to_jamo_char, decompose, jongseong_to_jamo_char, jungseong_to_jamo_char, recompose,
    SyllableParts,
};

/// 음절마다 `f`로 한 글자를 만들고 나머지 문자는 통과
fn map_syllables<F>(text: &str, mut f: F) -> String
where
    F: FnMut(SyllableParts) -> char,
{
    text.chars()
        .map(|c| match decompose(c) {
            Some(parts) => f(parts),
            None => c,
        })
        .collect()
}

/// 받침(종성) 제거: 한글 → 하그
///
/// 글자 수와 순서는 그대로이며, 두 번 적용해도 결과가 같다.
pub fn strip_final_consonant(text: &str) -> String {
    map_syllables(text, |parts| recompose(parts.without_jongseong()))
}

/// 초성 추출: 한국어 → ㅎㄱㅇ
pub fn extract_initial_consonant(text: &str) -> String {
    // 초성 인덱스는 항상 0~18이므로 표에서 찾지 못하는 경우는 없음
    map_syllables(text, |parts| {
        choseong_to_jamo_char(parts.choseong()).unwrap_or(char::REPLACEMENT_CHARACTER)
    })
}

/// 음절을 낱자모로 풀어 쓰기: 한글 → ㅎㅏㄴㄱㅡㄹ
pub fn disassemble(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        let Some(parts) = decompose(c) else {
            out.push(c);
            continue;
        };
        out.extend(choseong_to_jamo_char(parts.choseong()));
        out.extend(jungseong_to_jamo_char(parts.jungseong()));
        out.extend(jongseong_to_jamo_char(parts.jongseong()));
    }
    out
}

/// 받침이 있는 음절 수
pub fn count_final_consonants(text: &str) -> usize {
    text.chars()
        .filter_map(decompose)
        .filter(SyllableParts::has_jongseong)
        .count()
}
