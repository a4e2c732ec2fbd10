//! 副作用：Update 层产生、Backend 层执行的远程读取

use post_explorer_core::FetchTicket;

/// 待执行的加载请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /users`
    LoadUsers(FetchTicket),
    /// `GET /posts`
    LoadPosts(FetchTicket),
    /// `GET /posts/{id}`
    LoadPost { ticket: FetchTicket, id: String },
}
