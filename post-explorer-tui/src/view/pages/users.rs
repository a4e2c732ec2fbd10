//! 用户列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use post_explorer_core::{FetchState, User};

use crate::i18n::t;
use crate::model::state::UsersState;
use crate::model::ContentFocus;
use crate::view::components::fetch_panel;
use crate::view::components::search_box::SearchBox;
use crate::view::theme::Styles;

/// 渲染用户列表页面
pub fn render(state: &UsersState, content_focused: bool, frame: &mut Frame, area: Rect) {
    let texts = &t().users;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SearchBox::HEIGHT), // 搜索框
            Constraint::Length(1),                 // 提示
            Constraint::Min(1),                    // 列表
        ])
        .split(area);

    SearchBox {
        label: texts.search_label,
        value: state.browser.query(),
        placeholder: texts.search_placeholder,
        focused: content_focused && state.focus.is_search(),
    }
    .render(frame, layout[0]);

    frame.render_widget(
        Line::from(Span::styled(format!(" {}", texts.keyboard_hint), Styles::muted())),
        layout[1],
    );

    match state.fetch.state() {
        FetchState::Idle | FetchState::Loading => fetch_panel::render_loading(frame, layout[2], 3),
        FetchState::Failure(message) => {
            fetch_panel::render_error(frame, layout[2], texts.error_title, message);
        }
        FetchState::Success(_) => {
            let visible = state.visible();
            if visible.is_empty() {
                fetch_panel::render_empty(frame, layout[2], texts.empty_title, texts.empty_hint);
            } else {
                render_list(state, &visible, content_focused, frame, layout[2]);
            }
        }
    }
}

fn render_list(
    state: &UsersState,
    visible: &[&User],
    content_focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let texts = &t().users;
    let selected = state.browser.selection().selected(visible.len());
    let list_focused = content_focused && state.focus == ContentFocus::Body;

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = selected == Some(i);
            let is_focused = list_focused && state.focused_item == i;
            let prefix = if is_focused { "▶ " } else { "  " };
            let name_style = if is_selected {
                Styles::selected()
            } else {
                Styles::title()
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(user.name.as_str(), name_style),
                ]),
                Line::from(vec![
                    Span::styled(format!("    {} ", texts.email), Styles::muted()),
                    Span::styled(user.email.as_str(), Styles::accent()),
                ]),
                Line::from(vec![
                    Span::styled(format!("    {} ", texts.phone), Styles::muted()),
                    Span::styled(user.phone.as_str(), Styles::text()),
                    Span::styled(format!("   {} ", texts.website), Styles::muted()),
                    Span::styled(user.website.as_str(), Styles::text()),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    // 滚动跟随焦点所在条目，其次是选中项
    let anchor = if list_focused {
        Some(state.focused_item)
    } else {
        selected
    };
    let mut list_state = ListState::default();
    list_state.select(anchor);

    frame.render_stateful_widget(List::new(items), area, &mut list_state);
}
