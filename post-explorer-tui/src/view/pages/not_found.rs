//! 未知路径

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::view::theme::Styles;

pub fn render(path: &str, frame: &mut Frame, area: Rect) {
    let texts = &t().not_found;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  404 · {}", texts.title), Styles::title())),
        Line::from(""),
        Line::from(Span::styled(format!("  {path}"), Styles::accent())),
        Line::from(Span::styled(format!("  {}", texts.hint), Styles::muted())),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[ {} ]", texts.link), Styles::button(true)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
