//! 文章列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use post_explorer_core::{FetchState, Post};

use crate::i18n::t;
use crate::model::state::PostsState;
use crate::model::ContentFocus;
use crate::view::components::fetch_panel;
use crate::view::components::search_box::SearchBox;
use crate::view::theme::Styles;

/// 渲染文章列表页面
pub fn render(state: &PostsState, content_focused: bool, frame: &mut Frame, area: Rect) {
    let texts = &t().posts;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SearchBox::HEIGHT),
            Constraint::Length(1),
            Constraint::Min(1),
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
        FetchState::Idle | FetchState::Loading => fetch_panel::render_loading(frame, layout[2], 4),
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
    state: &PostsState,
    visible: &[&Post],
    content_focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let texts = &t().posts;
    let selected = state.browser.selection().selected(visible.len());
    let list_focused = content_focused && state.focus == ContentFocus::Body;

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let is_focused = list_focused && state.focused_item == i;
            let prefix = if is_focused { "▶ " } else { "  " };
            let title_style = if selected == Some(i) {
                Styles::selected()
            } else {
                Styles::title()
            };
            let author = post
                .user_id
                .map(|id| format!("    {} {id}", texts.author))
                .unwrap_or_default();

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(format!("#{:<4}", post.id), Styles::accent()),
                    Span::styled(post.title.as_str(), title_style),
                ]),
                Line::from(Span::styled(author, Styles::muted())),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(if list_focused {
        Some(state.focused_item)
    } else {
        selected
    });

    frame.render_stateful_widget(List::new(items), area, &mut list_state);
}
