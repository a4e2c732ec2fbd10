use post_explorer_core::{
    FetchCoordinator, KeyOutcome, KeyTarget, ListBrowser, NavKey, Post, RacePolicy, Searchable,
    User,
};

use crate::model::ContentFocus;

/// 列表页状态（用户列表、文章列表共用）
#[derive(Debug)]
pub struct ListPageState<T> {
    /// 集合加载
    pub fetch: FetchCoordinator<Vec<T>>,
    /// 搜索框与选中位置
    pub browser: ListBrowser,
    /// 搜索框 / 列表
    pub focus: ContentFocus,
    /// 列表获得焦点时，焦点所在的条目（过滤后列表中的位置）
    pub focused_item: usize,
}

pub type UsersState = ListPageState<User>;
pub type PostsState = ListPageState<Post>;

impl<T: Searchable> ListPageState<T> {
    pub fn new(policy: RacePolicy) -> Self {
        Self {
            fetch: FetchCoordinator::new(policy),
            browser: ListBrowser::new(),
            focus: ContentFocus::Search,
            focused_item: 0,
        }
    }

    /// 已加载的集合（未加载时为空）
    pub fn items(&self) -> &[T] {
        self.fetch.state().data().map_or(&[][..], Vec::as_slice)
    }

    /// 当前查询下的可见条目
    pub fn visible(&self) -> Vec<&T> {
        self.browser.visible(self.items())
    }

    /// 输入只在集合加载成功后可用
    pub fn accepts_input(&self) -> bool {
        self.fetch.state().data().is_some()
    }

    pub fn key_target(&self) -> KeyTarget {
        match self.focus {
            ContentFocus::Search => KeyTarget::SearchBox,
            ContentFocus::Body => KeyTarget::Item(self.focused_item),
        }
    }

    /// 在搜索框与列表之间切换；进入列表时焦点落在选中项上
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
        if self.focus == ContentFocus::Body {
            let len = self.visible().len();
            self.focused_item = self.browser.selection().selected(len).unwrap_or(0);
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.accepts_input() {
            self.browser.push_char(c);
        }
    }

    pub fn pop_char(&mut self) {
        if self.accepts_input() {
            self.browser.pop_char();
        }
    }

    /// 处理导航按键
    ///
    /// 键盘控制器未处理的按键在这里兜底：列表焦点下的 ↑/↓ 移动条目焦点，
    /// 搜索框中的 Space 作为普通字符输入。
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        let target = self.key_target();
        let items = self.fetch.state().data().map_or(&[][..], Vec::as_slice);
        let outcome = self.browser.handle_key(items, target, key);
        if outcome.consumed {
            return outcome;
        }

        let len = self.browser.visible(items).len();
        match (target, key) {
            (KeyTarget::Item(_), NavKey::Up) => {
                self.focused_item = self.focused_item.min(len.saturating_sub(1)).saturating_sub(1);
                KeyOutcome::consumed()
            }
            (KeyTarget::Item(_), NavKey::Down) => {
                if self.focused_item + 1 < len {
                    self.focused_item += 1;
                }
                KeyOutcome::consumed()
            }
            (KeyTarget::SearchBox, NavKey::Space) => {
                self.push_char(' ');
                KeyOutcome::consumed()
            }
            _ => outcome,
        }
    }
}
