//! UI 문자열 사전 (언어별, 영어 폴백)

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 지원 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Ko,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ko];

    /// 언어 코드 ("en", "ko")
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ko => "ko",
        }
    }

    /// 언어 코드 해석 (대소문자 무시, 모르는 코드는 None)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }
}

#[rustfmt::skip]
const EN: &[(&str, &str)] = &[
    ("login", "Login"),
    ("logout", "Logout"),
    ("welcomeTitle", "Welcome to KoreanBridge"),
    ("emailLabel", "Email"),
    ("passwordLabel", "Password"),
    ("signUp", "Sign Up"),
    ("loginRequired", "Please log in to save your coins!"),
    ("emptyInput", "Please enter some text first."),
    ("correct", "Correct!"),
    ("incorrect", "Not quite, try again."),
    ("coins", "Coins"),
];

#[rustfmt::skip]
const KO: &[(&str, &str)] = &[
    ("login", "로그인"),
    ("logout", "로그아웃"),
    ("welcomeTitle", "코리안브릿지에 오신 것을 환영합니다"),
    ("emailLabel", "이메일"),
    ("passwordLabel", "비밀번호"),
    ("signUp", "회원가입"),
    ("loginRequired", "코인을 저장하려면 로그인하세요!"),
    ("emptyInput", "먼저 문장을 입력하세요."),
    ("correct", "정답!"),
    ("incorrect", "아쉬워요, 다시 해 보세요."),
];

lazy_static! {
    static ref DICTIONARIES: HashMap<Lang, HashMap<&'static str, &'static str>> = {
        let mut m = HashMap::new();
        m.insert(Lang::En, EN.iter().copied().collect());
        m.insert(Lang::Ko, KO.iter().copied().collect());
        m
    };
}

/// 키에 해당하는 문자열 (해당 언어에 없으면 영어, 둘 다 없으면 None)
pub fn translate(lang: Lang, key: &str) -> Option<&'static str> {
    let lookup = |l: Lang| DICTIONARIES.get(&l).and_then(|d| d.get(key)).copied();
    lookup(lang).or_else(|| {
        if lang != Lang::En {
            log::debug!("번역 누락 ({}): {}", lang.code(), key);
        }
        lookup(Lang::En)
    })
}

/// 키 문자열 또는 키 자체 (화면 표시용)
pub fn translate_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    translate(lang, key).unwrap_or(key)
}
