//! 应用主状态结构

use post_explorer_core::{History, RacePolicy, Route};

use super::{Effect, FocusPanel, NavigationState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 浏览历史（当前路由为 `history.current()`）
    pub history: History,

    /// 当前页面
    pub page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 新页面使用的竞态策略
    race_policy: RacePolicy,

    /// 待执行的加载请求
    effects: Vec<Effect>,
}

impl App {
    /// 创建应用实例并挂载起始路由
    pub fn new(start: Route, race_policy: RacePolicy) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            history: History::new(start.clone()),
            page: Page::mount(&start, race_policy),
            status_message: None,
            show_help: false,
            race_policy,
            effects: Vec::new(),
        };
        app.navigation.sync_with(&start);
        app.begin_load();
        app
    }

    pub fn current_route(&self) -> &Route {
        self.history.current()
    }

    /// 导航到新路由（入历史栈），焦点移到内容面板
    pub fn navigate(&mut self, route: Route) {
        log::info!("Navigate to {route}");
        self.history.push(route.clone());
        self.mount(&route);
        self.focus = FocusPanel::Content;
    }

    /// 后退；没有历史时返回 false
    pub fn go_back(&mut self) -> bool {
        let Some(route) = self.history.back().cloned() else {
            return false;
        };
        log::info!("Back to {route}");
        self.mount(&route);
        true
    }

    /// 前进；没有历史时返回 false
    pub fn go_forward(&mut self) -> bool {
        let Some(route) = self.history.forward().cloned() else {
            return false;
        };
        log::info!("Forward to {route}");
        self.mount(&route);
        true
    }

    /// 重新加载当前页面，保留搜索框内容；无远程加载时返回 false
    pub fn reload(&mut self) -> bool {
        log::info!("Reload {}", self.current_route());
        self.begin_load()
    }

    /// 丢弃旧页面状态并挂载新页面
    fn mount(&mut self, route: &Route) {
        self.page = Page::mount(route, self.race_policy);
        self.navigation.sync_with(route);
        self.clear_status();
        self.begin_load();
    }

    /// 对当前页面发起一次加载（初次挂载或重试）；无远程加载时返回 false
    pub fn begin_load(&mut self) -> bool {
        let effect = match &mut self.page {
            Page::Users(state) => Effect::LoadUsers(state.fetch.begin()),
            Page::Posts(state) => Effect::LoadPosts(state.fetch.begin()),
            Page::PostDetail(state) => Effect::LoadPost {
                ticket: state.fetch.begin(),
                id: state.id.clone(),
            },
            Page::Landing(_) | Page::NotFound { .. } => return false,
        };
        log::debug!("Queued {effect:?}");
        self.effects.push(effect);
        true
    }

    /// 取出待执行的加载请求
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Route::Landing, RacePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_route_is_mounted_and_loading() {
        let mut app = App::new(Route::Users, RacePolicy::default());
        assert!(matches!(app.page, Page::Users(_)));
        assert!(app.page.is_loading());
        let effects = app.take_effects();
        assert!(matches!(effects.as_slice(), [Effect::LoadUsers(_)]));
        assert!(app.take_effects().is_empty());
    }

    #[test]
    fn landing_has_nothing_to_load() {
        let mut app = App::default();
        assert!(app.take_effects().is_empty());
        assert!(!app.reload());
    }

    #[test]
    fn navigation_remounts_with_fresh_state() {
        let mut app = App::new(Route::Posts, RacePolicy::default());
        let first_mount = match &app.page {
            Page::Posts(state) => state.fetch.mount(),
            _ => unreachable!(),
        };

        app.navigate(Route::post("3"));
        assert!(app.go_back());
        let second_mount = match &app.page {
            Page::Posts(state) => state.fetch.mount(),
            _ => unreachable!(),
        };

        assert_ne!(first_mount, second_mount);
        assert_eq!(app.take_effects().len(), 3);
        assert!(app.go_forward());
        assert_eq!(app.current_route(), &Route::post("3"));
        assert!(!app.go_forward());
    }

    #[test]
    fn detail_load_carries_raw_id() {
        let mut app = App::new(Route::post("abc"), RacePolicy::default());
        let effects = app.take_effects();
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadPost { id, .. }] if id == "abc"
        ));
    }

    #[test]
    fn sidebar_follows_route() {
        let mut app = App::default();
        app.navigate(Route::post("1"));
        assert_eq!(
            app.navigation.current_id(),
            Some(crate::model::NavItemId::Posts)
        );
        app.navigate(Route::Users);
        assert_eq!(
            app.navigation.current_id(),
            Some(crate::model::NavItemId::Users)
        );
    }
}
