//! 单行搜索输入框

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::view::theme::Styles;

pub struct SearchBox<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    /// 是否正在输入（显示光标）
    pub focused: bool,
}

impl SearchBox<'_> {
    /// 占用 3 行：上下边框 + 输入行
    pub const HEIGHT: u16 = 3;

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(Styles::title())
            .borders(Borders::ALL)
            .border_style(Styles::border(self.focused));
        let inner = block.inner(area);

        let line = if self.value.is_empty() {
            Line::from(Span::styled(self.placeholder, Styles::muted()))
        } else {
            Line::from(Span::styled(self.value, Styles::text()))
        };
        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            // 光标停在输入末尾（按显示宽度计算，兼容中文）
            let width = u16::try_from(self.value.width()).unwrap_or(u16::MAX);
            let x = inner.x.saturating_add(width).min(inner.right().saturating_sub(1));
            frame.set_cursor_position((x, inner.y));
        }
    }
}
