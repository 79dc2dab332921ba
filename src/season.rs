//! 날짜별 계절 배경

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// 연중 일수(1월 1일 = 1)를 4로 나눈 나머지로 선택
    pub fn for_day_of_year(day: u32) -> Self {
        Self::ALL[(day % 4) as usize]
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_day_of_year(date.ordinal())
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// body에 붙는 클래스 이름
    pub fn css_class(self) -> String {
        format!("season-{}", self.name())
    }

    /// 배경 이미지 경로
    pub fn image(self) -> String {
        format!("./assets/{}.jpg", self.name())
    }

    /// 미리 불러올 다음 배경
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}
