//! 后台请求结果消息

use post_explorer_core::{FetchResult, FetchTicket, Post, User};

/// 请求结果，带回发起时的票据
#[derive(Debug, Clone)]
pub enum FetchMessage {
    Users {
        ticket: FetchTicket,
        result: FetchResult<Vec<User>>,
    },
    Posts {
        ticket: FetchTicket,
        result: FetchResult<Vec<Post>>,
    },
    Post {
        ticket: FetchTicket,
        result: FetchResult<Post>,
    },
}

impl FetchMessage {
    pub fn ticket(&self) -> FetchTicket {
        match self {
            FetchMessage::Users { ticket, .. }
            | FetchMessage::Posts { ticket, .. }
            | FetchMessage::Post { ticket, .. } => *ticket,
        }
    }
}
