//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::{t, FeatureCardTexts};
use crate::model::state::{LandingCard, LandingState};
use crate::view::theme::Styles;

/// 渲染首页
pub fn render(state: &LandingState, content_focused: bool, frame: &mut Frame, area: Rect) {
    let texts = &t().landing;

    // 首页布局：欢迎信息 + 功能卡片 + 特性 + 号召
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 欢迎区域
            Constraint::Length(10), // 卡片
            Constraint::Min(1),    // 特性
            Constraint::Length(3), // 号召
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", texts.title), Styles::title())),
        Line::from(Span::styled(format!("  {}", texts.subtitle), Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    for (card, area) in LandingCard::all().iter().zip(cards.iter()) {
        let card_texts = match card {
            LandingCard::Users => &texts.users_card,
            LandingCard::Posts => &texts.posts_card,
        };
        let active = content_focused && state.current_card() == *card;
        render_card(card_texts, active, frame, *area);
    }

    let mut features = vec![Line::from(Span::styled(
        format!("  {}", texts.key_features_title),
        Styles::title(),
    ))];
    for (title, description) in texts.key_features {
        features.push(Line::from(vec![
            Span::styled(format!("  • {title}: "), Styles::accent()),
            Span::styled(*description, Styles::text()),
        ]));
    }
    frame.render_widget(Paragraph::new(features).wrap(Wrap { trim: false }), layout[2]);

    let cta = vec![
        Line::from(Span::styled(format!("  {}", texts.cta_title), Styles::title())),
        Line::from(Span::styled(format!("  {}", texts.cta_text), Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(cta), layout[3]);
}

fn render_card(texts: &FeatureCardTexts, active: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} {} ", texts.icon, texts.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(active));

    let mut lines = vec![Line::from(Span::styled(texts.description, Styles::text()))];
    lines.extend(
        texts
            .features
            .iter()
            .map(|feature| Line::from(Span::styled(format!("• {feature}"), Styles::muted()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", texts.button),
        Styles::button(active),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
