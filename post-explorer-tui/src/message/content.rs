//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、搜索输入、文章切换等

use post_explorer_core::NavKey;

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 键盘导航 ==========
    /// ↑ / ↓ / Enter / Space
    Key(NavKey),
    /// 在搜索框与正文之间切换
    ToggleSearchFocus,

    // ========== 文本输入 ==========
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,

    // ========== 加载 ==========
    /// 出错后重试
    Retry,

    // ========== 文章详情专用 ==========
    /// 上一篇
    PreviousPost,
    /// 下一篇
    NextPost,
}
