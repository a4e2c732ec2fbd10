//! 应用主消息枚举

use super::{ContentMessage, FetchMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 焦点移到左侧导航
    FocusNavigation,

    /// 焦点移到右侧内容
    FocusContent,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 后台请求完成
    Fetched(FetchMessage),

    /// 后退
    GoBack,

    /// 前进
    GoForward,

    /// 重新加载当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
