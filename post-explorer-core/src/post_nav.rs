//! Post Detail Navigation
//!
//! 上一篇 / 下一篇的 ID 计算。ID 从 1 开始，没有已知上限：
//! 超出最后一篇时由远端返回错误。

/// 第一个有效的文章 ID
pub const FIRST_POST_ID: u64 = 1;

/// 上一篇：当前为第一篇（或更小）时不可用
pub fn previous_post_id(current: u64) -> Option<u64> {
    current.checked_sub(1).filter(|&id| id >= FIRST_POST_ID)
}

/// 下一篇：总是可用
pub fn next_post_id(current: u64) -> u64 {
    current.saturating_add(1)
}

/// 是否显示可用的「上一篇」按钮
pub fn has_previous(current: u64) -> bool {
    previous_post_id(current).is_some()
}
