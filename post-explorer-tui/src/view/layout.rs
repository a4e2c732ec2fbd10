//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::Styles;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗在最上层
    components::help::render(app, frame);
}

/// 渲染标题栏：应用名 + 当前路径
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(
        " {} v{}  ·  {}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION"),
        app.current_route().path()
    ))
    .style(Styles::statusbar());
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus.is_content();

    let page_title = match &app.page {
        Page::Landing(_) => texts.nav.home.to_string(),
        Page::Users(_) => texts.nav.users.to_string(),
        Page::Posts(_) => texts.nav.posts.to_string(),
        Page::PostDetail(state) => format!("{} #{}", texts.post_detail.title, state.id),
        Page::NotFound { .. } => texts.not_found.title.to_string(),
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.page {
        Page::Landing(state) => pages::landing::render(state, focused, frame, inner_area),
        Page::Users(state) => pages::users::render(state, focused, frame, inner_area),
        Page::Posts(state) => pages::posts::render(state, focused, frame, inner_area),
        Page::PostDetail(state) => pages::post_detail::render(state, focused, frame, inner_area),
        Page::NotFound { path } => pages::not_found::render(path, frame, inner_area),
    }
}
