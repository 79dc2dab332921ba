//! 유니코드 한글 음절 분해/조합
//!
//! 완성형 한글 음절(U+AC00 ~ U+D7A3)은 (초성, 중성, 종성) 인덱스를
//! 다음 식으로 압축한 값이다:
//!
//! `code - 0xAC00 = (초성 × 21 + 중성) × 28 + 종성`
//!
//! 이 모듈의 [`decompose`]/[`recompose`]가 유일한 분해 연산이며,
//! 텍스트 변환은 모두 `core::transform`에서 이 결과 위에 만든다.

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 하나당 음절 수 (21 × 28)
const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 조합형 초성 자모 시작 (ᄀ, U+1100)
const CHOSEONG_CONJOINING_BASE: u32 = 0x1100;

/// 초성 표시용 호환 자모 (초성 인덱스 순서)
#[rustfmt::skip]
static CHOSEONG_JAMO: [char; CHOSEONG_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 표시용 호환 자모: ㅏ(U+314F) ~ ㅣ(U+3163) 연속 구간
#[rustfmt::skip]
static JUNGSEONG_JAMO: [char; JUNGSEONG_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 표시용 호환 자모 (인덱스 1부터, 0 = 종성 없음은 제외)
#[rustfmt::skip]
static JONGSEONG_JAMO: [char; JONGSEONG_COUNT as usize - 1] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 한 음절의 초성/중성/종성 인덱스
///
/// 범위를 벗어난 인덱스로는 만들 수 없으므로 [`recompose`]는 항상
/// 유효한 음절을 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyllableParts {
    choseong: u32,
    jungseong: u32,
    jongseong: u32,
}

impl SyllableParts {
    /// 인덱스 범위 검사 후 생성
    /// - choseong: 0~18
    /// - jungseong: 0~20
    /// - jongseong: 0~27 (0 = 종성 없음)
    pub fn new(choseong: u32, jungseong: u32, jongseong: u32) -> Option<Self> {
        if choseong >= CHOSEONG_COUNT
            || jungseong >= JUNGSEONG_COUNT
            || jongseong >= JONGSEONG_COUNT
        {
            return None;
        }
        Some(Self {
            choseong,
            jungseong,
            jongseong,
        })
    }

    pub fn choseong(&self) -> u32 {
        self.choseong
    }

    pub fn jungseong(&self) -> u32 {
        self.jungseong
    }

    pub fn jongseong(&self) -> u32 {
        self.jongseong
    }

    /// 받침이 있는지
    pub fn has_jongseong(&self) -> bool {
        self.jongseong != 0
    }

    /// 종성만 비운 음절
    pub fn without_jongseong(self) -> Self {
        Self {
            jongseong: 0,
            ..self
        }
    }

    /// (초성, 중성, 종성) 튜플
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.choseong, self.jungseong, self.jongseong)
    }
}

/// 문자가 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
///
/// 음절 영역 밖의 문자는 `None`: 오류가 아니라 호출자가 그대로
/// 통과시켜야 하는 경우다.
pub fn decompose(c: char) -> Option<SyllableParts> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    Some(SyllableParts {
        choseong: offset / SYLLABLES_PER_CHOSEONG,
        jungseong: (offset % SYLLABLES_PER_CHOSEONG) / JONGSEONG_COUNT,
        jongseong: offset % JONGSEONG_COUNT,
    })
}

/// 인덱스로 완성된 한글 음절 생성 ([`decompose`]의 역연산)
pub fn recompose(parts: SyllableParts) -> char {
    let code = HANGUL_SYLLABLE_BASE
        + (parts.choseong * JUNGSEONG_COUNT + parts.jungseong) * JONGSEONG_COUNT
        + parts.jongseong;
    debug_assert!(code <= HANGUL_SYLLABLE_LAST);
    // SyllableParts는 범위 안의 인덱스만 가지므로 code는 항상 음절 영역
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// 초성/중성/종성 인덱스로 완성된 한글 생성 (범위 밖이면 None)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    SyllableParts::new(choseong, jungseong, jongseong).map(recompose)
}

/// 초성 인덱스의 표시용 자모 (호환용 자모)
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스의 표시용 모음 (호환용 자모)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스의 표시용 자모 (0 = 종성 없음 -> None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    let idx = (jong as usize).checked_sub(1)?;
    JONGSEONG_JAMO.get(idx).copied()
}

/// 초성 인덱스의 조합형 자모 (U+1100 + 인덱스)
///
/// 조합형 초성은 음절 분해 식과 같은 순서로 연속 배치되어 있어
/// 표시용 테이블 순서를 검증하는 기준이 된다.
pub fn choseong_conjoining(cho: u32) -> Option<char> {
    if cho >= CHOSEONG_COUNT {
        return None;
    }
    char::from_u32(CHOSEONG_CONJOINING_BASE + cho)
}
