//! 快捷键帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// 渲染帮助弹窗（如果已打开）
pub fn render(app: &App, frame: &mut Frame) {
    if !app.show_help {
        return;
    }

    let texts = &t().help;
    let key_width = texts
        .entries
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = texts
        .entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {key:<key_width$}  "), Styles::hint_key()),
                Span::styled(*desc, Styles::text()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(format!(" {}", texts.close_hint), Styles::muted()));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 计算居中的弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
