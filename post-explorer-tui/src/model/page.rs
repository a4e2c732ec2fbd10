//! 页面：路由挂载后的状态

use post_explorer_core::{RacePolicy, Route};

use super::state::{LandingState, PostDetailState, PostsState, UsersState};

/// 当前页面及其状态
#[derive(Debug)]
pub enum Page {
    /// 首页
    Landing(LandingState),
    /// 用户列表
    Users(UsersState),
    /// 文章列表
    Posts(PostsState),
    /// 文章详情
    PostDetail(PostDetailState),
    /// 未知路径
    NotFound { path: String },
}

impl Page {
    /// 为路由创建全新的页面状态（尚未开始加载）
    pub fn mount(route: &Route, policy: RacePolicy) -> Self {
        match route {
            Route::Landing => Page::Landing(LandingState::new()),
            Route::Users => Page::Users(UsersState::new(policy)),
            Route::Posts => Page::Posts(PostsState::new(policy)),
            Route::PostDetail { id } => Page::PostDetail(PostDetailState::new(id.clone(), policy)),
            Route::NotFound { path } => Page::NotFound { path: path.clone() },
        }
    }

    /// 页面是否有远程加载（有远程加载的页面同时带搜索框）
    pub fn has_fetch(&self) -> bool {
        matches!(self, Page::Users(_) | Page::Posts(_) | Page::PostDetail(_))
    }

    /// 当前加载失败的消息
    pub fn failure(&self) -> Option<&str> {
        match self {
            Page::Users(state) => state.fetch.state().error(),
            Page::Posts(state) => state.fetch.state().error(),
            Page::PostDetail(state) => state.fetch.state().error(),
            Page::Landing(_) | Page::NotFound { .. } => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Page::Users(state) => state.fetch.state().is_loading(),
            Page::Posts(state) => state.fetch.state().is_loading(),
            Page::PostDetail(state) => state.fetch.state().is_loading(),
            Page::Landing(_) | Page::NotFound { .. } => false,
        }
    }

    /// 是否正在向文本输入框输入（此时普通字符不作为快捷键）
    pub fn text_input_active(&self) -> bool {
        match self {
            Page::Users(state) => state.focus.is_search(),
            Page::Posts(state) => state.focus.is_search(),
            Page::PostDetail(state) => state.focus.is_search(),
            Page::Landing(_) | Page::NotFound { .. } => false,
        }
    }

    /// 当前加载状态标签，无远程加载时为 `None`
    pub fn fetch_tag(&self) -> Option<&'static str> {
        match self {
            Page::Users(state) => Some(state.fetch.state().tag()),
            Page::Posts(state) => Some(state.fetch.state().tag()),
            Page::PostDetail(state) => Some(state.fetch.state().tag()),
            Page::Landing(_) | Page::NotFound { .. } => None,
        }
    }
}
