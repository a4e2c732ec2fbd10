//! 文章详情页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use post_explorer_core::{has_previous, FetchState, Post};

use crate::i18n::t;
use crate::model::state::PostDetailState;
use crate::view::components::fetch_panel;
use crate::view::components::search_box::SearchBox;
use crate::view::theme::Styles;

/// 渲染文章详情页面
pub fn render(state: &PostDetailState, content_focused: bool, frame: &mut Frame, area: Rect) {
    let texts = &t().post_detail;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SearchBox::HEIGHT), // 按 ID 搜索
            Constraint::Length(1),                 // 提示
            Constraint::Min(1),                    // 正文
            Constraint::Length(1),                 // 上一篇 / 下一篇
        ])
        .split(area);

    SearchBox {
        label: texts.search_label,
        value: &state.search_input,
        placeholder: texts.search_placeholder,
        focused: content_focused && state.focus.is_search(),
    }
    .render(frame, layout[0]);

    frame.render_widget(
        Line::from(Span::styled(format!(" {}", texts.search_hint), Styles::muted())),
        layout[1],
    );

    match state.fetch.state() {
        FetchState::Idle | FetchState::Loading => fetch_panel::render_loading(frame, layout[2], 3),
        FetchState::Failure(message) => {
            fetch_panel::render_error(frame, layout[2], texts.error_title, message);
        }
        FetchState::Success(post) => render_post(post, frame, layout[2]),
    }

    render_buttons(state, frame, layout[3]);
}

fn render_post(post: &Post, frame: &mut Frame, area: Rect) {
    let texts = &t().post_detail;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {}", post.title), Styles::title())),
    ];
    if let Some(user_id) = post.user_id {
        lines.push(Line::from(Span::styled(
            format!(" {} {user_id}", texts.author),
            Styles::muted(),
        )));
    }
    lines.push(Line::from(""));
    // 正文中的换行原样保留
    lines.extend(
        post.body
            .lines()
            .map(|line| Line::from(Span::styled(format!(" {line}"), Styles::text()))),
    );

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// 「上一篇」在第一篇或尚未显示文章时禁用
fn render_buttons(state: &PostDetailState, frame: &mut Frame, area: Rect) {
    let texts = &t().post_detail;
    let button = |label: &str, enabled: bool| {
        let style = if enabled {
            Styles::button(false)
        } else {
            Styles::button_disabled()
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let shows_previous = state.post().is_some_and(|post| has_previous(post.id));
    let previous = button(texts.previous, shows_previous);
    let next = button(texts.next, state.next_id().is_some());

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(Line::from(vec![Span::raw(" "), previous]), halves[0]);
    frame.render_widget(
        Line::from(vec![next, Span::raw(" ")]).right_aligned(),
        halves[1],
    );
}
