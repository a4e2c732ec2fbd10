//! 导航状态定义

use post_explorer_core::Route;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Users,
    Posts,
}

impl NavItemId {
    /// 导航项对应的路由
    pub fn route(self) -> Route {
        match self {
            NavItemId::Home => Route::Landing,
            NavItemId::Users => Route::Users,
            NavItemId::Posts => Route::Posts,
        }
    }

    /// 路由所属的导航项（文章详情归入 Posts）
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Landing => Some(NavItemId::Home),
            Route::Users => Some(NavItemId::Users),
            Route::Posts | Route::PostDetail { .. } => Some(NavItemId::Posts),
            Route::NotFound { .. } => None,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Users,
                    icon: "@",
                },
                NavItem {
                    id: NavItemId::Posts,
                    icon: "≡",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 高亮与路由对应的导航项
    pub fn sync_with(&mut self, route: &Route) {
        if let Some(id) = NavItemId::for_route(route) {
            if let Some(index) = self.items.iter().position(|item| item.id == id) {
                self.selected = index;
            }
        }
    }

    /// 获取当前选中的导航项
    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.current_item().map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
