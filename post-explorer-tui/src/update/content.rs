//! 内容面板消息处理

use post_explorer_core::{NavKey, Route};

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::Key(key) => handle_key(app, key),
        ContentMessage::ToggleSearchFocus => handle_toggle_search_focus(app),
        ContentMessage::Input(ch) => handle_input(app, ch),
        ContentMessage::Backspace => handle_backspace(app),
        ContentMessage::Retry => handle_retry(app),
        ContentMessage::PreviousPost => handle_previous_post(app),
        ContentMessage::NextPost => handle_next_post(app),
    }
}

// ========== 键盘导航 ==========

fn handle_key(app: &mut App, key: NavKey) {
    let activate = matches!(key, NavKey::Enter | NavKey::Space);

    // 错误面板上的 Enter 即「重试」；列表页的搜索框此时不可用，同样适用
    let list_page = matches!(app.page, Page::Users(_) | Page::Posts(_));
    if activate && app.page.failure().is_some() && (list_page || !app.page.text_input_active()) {
        handle_retry(app);
        return;
    }

    let target = match &mut app.page {
        Page::Landing(state) => match key {
            NavKey::Up => {
                state.select_previous();
                None
            }
            NavKey::Down => {
                state.select_next();
                None
            }
            NavKey::Enter | NavKey::Space => Some(state.current_card().route()),
        },
        Page::Users(state) => state
            .handle_key(key)
            .activate
            .map(|id| Route::parse(&format!("/{id}"))),
        Page::Posts(state) => state
            .handle_key(key)
            .activate
            .map(|id| Route::post(id.to_string())),
        Page::PostDetail(state) => {
            if key == NavKey::Enter && state.focus.is_search() {
                Some(Route::post(state.submitted_id()))
            } else {
                None
            }
        }
        Page::NotFound { .. } => activate.then_some(Route::Landing),
    };

    if let Some(route) = target {
        app.navigate(route);
    }
}

fn handle_toggle_search_focus(app: &mut App) {
    match &mut app.page {
        Page::Users(state) => state.toggle_focus(),
        Page::Posts(state) => state.toggle_focus(),
        Page::PostDetail(state) => state.focus = state.focus.toggle(),
        Page::Landing(_) | Page::NotFound { .. } => {}
    }
}

// ========== 文本输入 ==========

fn handle_input(app: &mut App, ch: char) {
    match &mut app.page {
        Page::Users(state) => state.push_char(ch),
        Page::Posts(state) => state.push_char(ch),
        Page::PostDetail(state) => state.search_input.push(ch),
        Page::Landing(_) | Page::NotFound { .. } => {}
    }
}

fn handle_backspace(app: &mut App) {
    match &mut app.page {
        Page::Users(state) => state.pop_char(),
        Page::Posts(state) => state.pop_char(),
        Page::PostDetail(state) => {
            state.search_input.pop();
        }
        Page::Landing(_) | Page::NotFound { .. } => {}
    }
}

// ========== 加载 ==========

/// 仅在错误面板上重试
fn handle_retry(app: &mut App) {
    if app.page.failure().is_some() {
        log::info!("Retrying {}", app.current_route());
        app.begin_load();
    }
}

// ========== 文章详情 ==========

fn handle_previous_post(app: &mut App) {
    let Page::PostDetail(state) = &app.page else {
        return;
    };
    let (previous, shown) = (state.previous_id(), state.post().is_some());
    match previous {
        Some(id) => app.navigate(Route::post(id.to_string())),
        // 第一篇：按钮禁用，不发请求
        None if shown => app.set_status(t().status.first_post),
        None => {}
    }
}

fn handle_next_post(app: &mut App) {
    let Page::PostDetail(state) = &app.page else {
        return;
    };
    if let Some(id) = state.next_id() {
        app.navigate(Route::post(id.to_string()));
    }
}
