//! 통합 테스트 - 받침 제거, 초성 추출, 퀴즈 보상

use koreanbridge::core::unicode::{decompose, recompose};
use koreanbridge::nav::{Drawer, Navigator, View};
use koreanbridge::rewards::Profile;
use koreanbridge::{
    disassemble, extract_initial_consonant, strip_final_consonant, ChosungQuiz, CoinWallet,
    MemoryProfileStore, QuizOutcome, Session,
};

#[test]
fn test_strip_final_consonant() {
    assert_eq!(strip_final_consonant("한글"), "하그");
    assert_eq!(strip_final_consonant("hello 한국"), "hello 하구");
    assert_eq!(strip_final_consonant("가"), "가"); // 받침 없음
}

#[test]
fn test_strip_is_idempotent() {
    let once = strip_final_consonant("닭볶음탕 먹었어요");
    assert_eq!(strip_final_consonant(&once), once);
}

#[test]
fn test_extract_initial_consonant() {
    assert_eq!(extract_initial_consonant("한국어"), "ㅎㄱㅇ");
    assert_eq!(extract_initial_consonant(""), "");
    assert_eq!(extract_initial_consonant("서울 2026"), "ㅅㅇ 2026");
}

#[test]
fn test_codepoints() {
    // 한(U+D55C) → 하(U+D558), 글(U+AE00) → 그(U+ADF8)
    let han = decompose('\u{D55C}').unwrap();
    assert_eq!(recompose(han.without_jongseong()), '\u{D558}');
    let geul = decompose('\u{AE00}').unwrap();
    assert_eq!(recompose(geul.without_jongseong()), '\u{ADF8}');
}

#[test]
fn test_non_hangul_passthrough() {
    let text = "abc 123 !? ㄱㅏ 漢字 \u{1100}\u{1161}";
    assert_eq!(strip_final_consonant(text), text);
    assert_eq!(extract_initial_consonant(text), text);
    assert_eq!(disassemble(text), text);
}

#[test]
fn test_quiz_rewards_coin_once() {
    let store = MemoryProfileStore::new();
    store
        .insert(Profile {
            id: "learner".into(),
            coins: 0,
        })
        .unwrap();
    let mut wallet = CoinWallet::new(store);
    wallet.sign_in(Session::new("learner"));

    let mut quiz = ChosungQuiz::new("비빔밥");
    assert_eq!(quiz.hint(), "ㅂㅂㅂ");

    for guess in ["불고기", "비빔밥", "비빔밥"] {
        if quiz.check(guess) == QuizOutcome::Correct {
            wallet.earn(1).unwrap();
        }
    }
    assert_eq!(wallet.coins(), 1);
}

#[test]
fn test_navigation_deep_link() {
    let mut nav = Navigator::from_hash("#rewards");
    assert_eq!(nav.view(), View::Home);
    assert_eq!(nav.drawer(), Some(Drawer::Rewards));

    nav.set_hash("community");
    assert_eq!(nav.view(), View::Community);
    assert_eq!(nav.drawer(), None);
}
