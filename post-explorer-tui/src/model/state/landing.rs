use post_explorer_core::Route;

/// 首页功能卡片
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingCard {
    Users,
    Posts,
}

impl LandingCard {
    pub fn all() -> &'static [LandingCard] {
        &[LandingCard::Users, LandingCard::Posts]
    }

    /// 卡片链接
    pub fn route(self) -> Route {
        match self {
            LandingCard::Users => Route::Users,
            LandingCard::Posts => Route::Posts,
        }
    }
}

/// 首页状态
#[derive(Debug, Default)]
pub struct LandingState {
    /// 当前选中的卡片
    pub selected: usize,
}

impl LandingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        let len = LandingCard::all().len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % LandingCard::all().len();
    }

    pub fn current_card(&self) -> LandingCard {
        LandingCard::all()
            .get(self.selected)
            .copied()
            .unwrap_or(LandingCard::Users)
    }
}
