//! 请求结果处理

use post_explorer_core::ResolveOutcome;

use crate::i18n::t;
use crate::message::FetchMessage;
use crate::model::{App, Page};

/// 把后台返回的结果交给当前页面
///
/// 票据属于其他页面（已离开或已重新挂载）时静默丢弃。
pub fn update(app: &mut App, msg: FetchMessage) {
    let ticket = msg.ticket();
    let outcome = match (&mut app.page, msg) {
        (Page::Users(state), FetchMessage::Users { ticket, result }) => {
            state.fetch.resolve(ticket, result)
        }
        (Page::Posts(state), FetchMessage::Posts { ticket, result }) => {
            state.fetch.resolve(ticket, result)
        }
        (Page::PostDetail(state), FetchMessage::Post { ticket, result }) => {
            state.fetch.resolve(ticket, result)
        }
        _ => ResolveOutcome::Unmounted,
    };

    log::debug!(
        "Fetch result seq {} -> {outcome:?} ({})",
        ticket.seq,
        app.page.fetch_tag().unwrap_or("-")
    );

    if outcome == ResolveOutcome::Applied
        && app.status_message.as_deref() == Some(t().status.refreshing)
    {
        app.clear_status();
    }
}
