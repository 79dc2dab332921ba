//! 화면(View)/서랍(Drawer) 전환과 해시 라우팅

/// 메인 화면
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Learning,
    Media,
    Community,
    KCulture,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Learning,
        View::Media,
        View::Community,
        View::KCulture,
    ];

    /// 해시 이름 (`#learning` 등)
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Learning => "learning",
            View::Media => "media",
            View::Community => "community",
            View::KCulture => "kculture",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

/// 화면 위에 열리는 서랍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawer {
    Rewards,
    Travel,
    Dictionary,
}

impl Drawer {
    pub const ALL: [Drawer; 3] = [Drawer::Rewards, Drawer::Travel, Drawer::Dictionary];

    pub fn name(self) -> &'static str {
        match self {
            Drawer::Rewards => "rewards",
            Drawer::Travel => "travel",
            Drawer::Dictionary => "dictionary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

/// 해시 하나가 가리키는 화면 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub view: View,
    pub drawer: Option<Drawer>,
}

impl Route {
    pub const HOME: Route = Route {
        view: View::Home,
        drawer: None,
    };

    /// 해시 해석
    /// - 빈 해시 → 홈
    /// - 화면 이름 → 그 화면, 서랍 닫힘
    /// - 서랍 이름 → 홈 화면 위에 그 서랍
    /// - 모르는 이름 → 홈
    pub fn from_hash(hash: &str) -> Self {
        Self::from_name(hash.strip_prefix('#').unwrap_or(hash))
    }

    /// `#`을 뗀 해시 이름 해석
    pub fn from_name(name: &str) -> Self {
        if let Some(view) = View::from_name(name) {
            return Route { view, drawer: None };
        }
        if let Some(drawer) = Drawer::from_name(name) {
            return Route {
                view: View::Home,
                drawer: Some(drawer),
            };
        }
        if !name.is_empty() {
            log::debug!("알 수 없는 해시: {}", name);
        }
        Route::HOME
    }
}

/// 현재 해시와 화면 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    hash: String,
    route: Route,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            hash: String::new(),
            route: Route::HOME,
        }
    }

    /// 딥 링크로 시작
    pub fn from_hash(hash: &str) -> Self {
        let mut nav = Self::new();
        nav.hash = hash.strip_prefix('#').unwrap_or(hash).to_string();
        nav.apply_hash();
        nav
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn view(&self) -> View {
        self.route.view
    }

    pub fn drawer(&self) -> Option<Drawer> {
        self.route.drawer
    }

    /// 내비게이션 버튼 클릭: 빈 대상은 무시, 같은 해시여도 다시 적용
    pub fn set_hash(&mut self, target: &str) {
        let target = target.strip_prefix('#').unwrap_or(target);
        if target.is_empty() {
            return;
        }
        if self.hash != target {
            self.hash = target.to_string();
        }
        self.apply_hash();
    }

    /// 현재 해시를 화면 상태에 반영
    pub fn apply_hash(&mut self) {
        self.route = Route::from_name(&self.hash);
    }

    /// 서랍만 닫기 (해시와 화면은 유지)
    pub fn close_drawer(&mut self) {
        self.route.drawer = None;
    }
}
