//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, NavItemId};
use crate::view::theme::Styles;

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };

            let label = match nav_item.id {
                NavItemId::Home => texts.nav.home,
                NavItemId::Users => texts.nav.users,
                NavItemId::Posts => texts.nav.posts,
            };

            let style = if is_selected {
                Styles::selected()
            } else {
                Styles::text()
            };

            ListItem::new(Line::from(Span::styled(
                format!("{prefix}{} {label}", nav_item.icon),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
