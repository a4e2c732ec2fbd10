//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift（`?`、`[` 等在部分键盘布局下带 Shift 上报）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers,
            _ => key.modifiers == self.modifiers,
        }
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 历史
    pub const HISTORY_BACK: KeyBinding = KeyBinding::alt(KeyCode::Left);
    pub const HISTORY_FORWARD: KeyBinding = KeyBinding::alt(KeyCode::Right);

    // 面板切换
    pub const FOCUS_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const FOCUS_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const SWITCH_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 内容
    pub const RETRY: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const PREVIOUS_POST: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const NEXT_POST: KeyBinding = KeyBinding::key(KeyCode::Char(']'));
}
