//! 加载中 / 加载失败 / 空结果的占位面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 骨架屏：在真实内容到达前占位
pub fn render_loading(frame: &mut Frame, area: Rect, rows: usize) {
    let c = colors();
    let bar = |width: u16| {
        Span::styled(
            " ".repeat(usize::from(width)),
            Style::default().bg(c.skeleton),
        )
    };
    let full = area.width.saturating_sub(4);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("  {}", t().common.loading),
            Styles::muted().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];
    for _ in 0..rows {
        lines.push(Line::from(vec![Span::raw("  "), bar(full / 2)]));
        lines.push(Line::from(vec![Span::raw("  "), bar(full / 4 * 3)]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 错误面板：标题 + 消息 + 「重试」按钮
pub fn render_error(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let c = colors();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  ✕ {title}"),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("  {message}"), Styles::text())),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[ {} ]", t().common.try_again), Styles::button(true)),
            Span::styled(
                format!("  ({} / {})", t().hints.keys.retry, t().hints.keys.enter),
                Styles::muted(),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// 过滤后没有条目
pub fn render_empty(frame: &mut Frame, area: Rect, title: &str, hint: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {title}"), Styles::title())),
        Line::from(""),
        Line::from(Span::styled(format!("  {hint}"), Styles::muted())),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
