//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点和页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = vec![(keys.arrows_lr, actions.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match &app.page {
            Page::Landing(_) => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.enter, actions.open));
            }
            Page::Users(_) | Page::Posts(_) => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.enter, actions.open));
                hints.push((keys.tab, actions.toggle_search));
            }
            Page::PostDetail(_) => {
                hints.push((keys.enter, actions.submit));
                hints.push((keys.brackets, actions.prev_next));
                hints.push((keys.tab, actions.toggle_search));
            }
            Page::NotFound { .. } => {
                hints.push((keys.enter, actions.open));
            }
        },
    }

    if app.page.failure().is_some() {
        hints.push((keys.retry, actions.retry));
    }
    if app.page.has_fetch() {
        hints.push((keys.refresh, actions.refresh));
    }
    if app.history.can_go_back() {
        hints.push((keys.esc, actions.back));
    }

    hints.push((keys.help, actions.help));
    hints.push((keys.quit, actions.quit));

    hints
}
