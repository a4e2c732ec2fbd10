//! Keyboard Navigation Controller
//!
//! 列表页面的键盘模型：
//!
//! - 焦点在搜索框：↑/↓ 在过滤后的列表中循环移动 [`SelectionIndex`]，
//!   Enter 打开当前选中项（未选中时不处理）
//! - 焦点在某个列表项：Enter/Space 直接打开该项，与 `SelectionIndex` 无关
//! - 查询文本的任何改变都会把 `SelectionIndex` 重置为未选中

use crate::filter::{filter, Searchable};

/// 过滤后列表中的选中位置，`None` 表示未选中
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionIndex(Option<usize>);

impl SelectionIndex {
    pub const NONE: Self = Self(None);

    pub fn at(index: usize) -> Self {
        Self(Some(index))
    }

    /// 原始值（可能越界）
    pub fn get(self) -> Option<usize> {
        self.0
    }

    /// 仅当落在 `[0, len)` 内时返回索引
    pub fn selected(self, len: usize) -> Option<usize> {
        self.0.filter(|&index| index < len)
    }

    /// ↓：前进一项，末尾回到第一项
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.0 = None;
            return;
        }
        self.0 = Some(match self.0 {
            Some(index) if index + 1 < len => index + 1,
            _ => 0,
        });
    }

    /// ↑：后退一项，第一项（或未选中）回到最后一项
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            self.0 = None;
            return;
        }
        self.0 = Some(match self.0 {
            Some(index) if index > 0 => (index - 1).min(len - 1),
            _ => len - 1,
        });
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }
}

/// 导航相关的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Space,
}

/// 接收按键的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    SearchBox,
    /// 过滤后列表中第 n 项
    Item(usize),
}

/// 按键处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// 按键已被处理，不再交给其他绑定
    pub consumed: bool,
    /// 需要打开详情的条目 ID
    pub activate: Option<u64>,
}

impl KeyOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn consumed() -> Self {
        Self {
            consumed: true,
            activate: None,
        }
    }

    pub fn activate(id: u64) -> Self {
        Self {
            consumed: true,
            activate: Some(id),
        }
    }
}

/// 搜索框 + 选中位置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBrowser {
    query: String,
    selection: SelectionIndex,
}

impl ListBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> SelectionIndex {
        self.selection
    }

    /// 替换查询文本；文本变化时重置选中位置
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.selection.reset();
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selection.reset();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.selection.reset();
        }
    }

    /// 当前查询下可见的条目
    pub fn visible<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter(items, &self.query)
    }

    /// 处理一次按键
    pub fn handle_key<T: Searchable>(
        &mut self,
        items: &[T],
        target: KeyTarget,
        key: NavKey,
    ) -> KeyOutcome {
        let visible = self.visible(items);
        let len = visible.len();

        match (target, key) {
            (KeyTarget::SearchBox, NavKey::Down) => {
                self.selection.move_down(len);
                KeyOutcome::consumed()
            }
            (KeyTarget::SearchBox, NavKey::Up) => {
                self.selection.move_up(len);
                KeyOutcome::consumed()
            }
            (KeyTarget::SearchBox, NavKey::Enter) => self
                .selection
                .selected(len)
                .and_then(|index| visible.get(index))
                .map_or_else(KeyOutcome::ignored, |item| KeyOutcome::activate(item.id())),
            (KeyTarget::Item(index), NavKey::Enter | NavKey::Space) => visible
                .get(index)
                .map_or_else(KeyOutcome::ignored, |item| KeyOutcome::activate(item.id())),
            (KeyTarget::SearchBox, NavKey::Space) | (KeyTarget::Item(_), NavKey::Up | NavKey::Down) => {
                KeyOutcome::ignored()
            }
        }
    }
}
