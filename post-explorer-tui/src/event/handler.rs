//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use post_explorer_core::NavKey;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 包括终端窗口大小改变：下一帧自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 一次 Enter 只能触发一次导航
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 帮助弹窗打开时只响应关闭
    if app.show_help {
        return handle_help_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::HISTORY_BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::HISTORY_FORWARD.matches(&key) {
        return AppMessage::GoForward;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理帮助弹窗的按键
fn handle_help_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => AppMessage::CloseHelp,
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::FOCUS_RIGHT.matches(&key) || DefaultKeymap::SWITCH_FOCUS.matches(&key) {
        return AppMessage::FocusContent;
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::FOCUS_LEFT.matches(&key) {
        return AppMessage::FocusNavigation;
    }

    if DefaultKeymap::SWITCH_FOCUS.matches(&key) {
        return if app.page.has_fetch() {
            AppMessage::Content(ContentMessage::ToggleSearchFocus)
        } else {
            AppMessage::ToggleFocus
        };
    }

    if app.page.text_input_active() {
        handle_text_input_keys(key, &app.page)
    } else {
        handle_body_keys(key)
    }
}

/// 焦点在搜索框：普通字符都是输入
fn handle_text_input_keys(key: KeyEvent, page: &Page) -> AppMessage {
    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();

    match key.code {
        KeyCode::Up => AppMessage::Content(ContentMessage::Key(NavKey::Up)),
        KeyCode::Down => AppMessage::Content(ContentMessage::Key(NavKey::Down)),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Key(NavKey::Enter)),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),

        // 列表搜索框中的 Space 先交给键盘控制器
        KeyCode::Char(' ') if plain && !matches!(page, Page::PostDetail(_)) => {
            AppMessage::Content(ContentMessage::Key(NavKey::Space))
        }

        KeyCode::Char(ch) if plain => AppMessage::Content(ContentMessage::Input(ch)),

        _ => AppMessage::Noop,
    }
}

/// 焦点在列表 / 正文：字符键是快捷键
fn handle_body_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::RETRY.matches(&key) {
        return AppMessage::Content(ContentMessage::Retry);
    }
    if DefaultKeymap::PREVIOUS_POST.matches(&key) {
        return AppMessage::Content(ContentMessage::PreviousPost);
    }
    if DefaultKeymap::NEXT_POST.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPost);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::Key(NavKey::Up)),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::Key(NavKey::Down))
        }
        // Enter / Space: 打开
        KeyCode::Enter => AppMessage::Content(ContentMessage::Key(NavKey::Enter)),
        KeyCode::Char(' ') => AppMessage::Content(ContentMessage::Key(NavKey::Space)),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};
    use post_explorer_core::{RacePolicy, Route};

    use super::*;
    use crate::model::{ContentFocus, FocusPanel};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn content_app(route: Route) -> App {
        let mut app = App::new(route, RacePolicy::default());
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn only_press_is_handled() {
        let app = content_app(Route::Users);
        for kind in [KeyEventKind::Repeat, KeyEventKind::Release] {
            let msg = handle_event(with_kind(KeyCode::Enter, kind), &app);
            assert!(matches!(msg, AppMessage::Noop));
        }
        let msg = handle_event(with_kind(KeyCode::Enter, KeyEventKind::Press), &app);
        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::Key(NavKey::Enter))
        ));
    }

    #[test]
    fn q_is_typed_in_search_box() {
        let app = content_app(Route::Users);
        let msg = handle_event(press(KeyCode::Char('q')), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::Input('q'))));
    }

    #[test]
    fn q_quits_outside_text_input() {
        let mut app = content_app(Route::Users);
        if let Page::Users(state) = &mut app.page {
            state.focus = ContentFocus::Body;
        }
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));

        let landing = App::default();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &landing),
            AppMessage::Quit
        ));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let app = content_app(Route::Users);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(ctrl_c, &app), AppMessage::Quit));
    }

    #[test]
    fn space_goes_to_controller_in_list_search() {
        let app = content_app(Route::Posts);
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &app),
            AppMessage::Content(ContentMessage::Key(NavKey::Space))
        ));

        let mut detail = content_app(Route::post("1"));
        if let Page::PostDetail(state) = &mut detail.page {
            state.focus = ContentFocus::Search;
        }
        assert!(matches!(
            handle_event(press(KeyCode::Char(' ')), &detail),
            AppMessage::Content(ContentMessage::Input(' '))
        ));
    }

    #[test]
    fn brackets_step_posts() {
        let app = content_app(Route::post("2"));
        assert!(matches!(
            handle_event(press(KeyCode::Char('[')), &app),
            AppMessage::Content(ContentMessage::PreviousPost)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char(']')), &app),
            AppMessage::Content(ContentMessage::NextPost)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('r')), &app),
            AppMessage::Content(ContentMessage::Retry)
        ));
    }

    #[test]
    fn history_keys() {
        let app = content_app(Route::Users);
        assert!(matches!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack));
        let alt_left = Event::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::ALT));
        assert!(matches!(handle_event(alt_left, &app), AppMessage::GoBack));
        let alt_right = Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::ALT));
        assert!(matches!(handle_event(alt_right, &app), AppMessage::GoForward));
        assert!(matches!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::FocusNavigation
        ));
    }

    #[test]
    fn tab_switches_search_focus_or_panel() {
        let users = content_app(Route::Users);
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &users),
            AppMessage::Content(ContentMessage::ToggleSearchFocus)
        ));

        let landing = content_app(Route::Landing);
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &landing),
            AppMessage::ToggleFocus
        ));
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = content_app(Route::Users);
        app.show_help = true;
        assert!(matches!(
            handle_event(press(KeyCode::Char('x')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::CloseHelp
        ));
    }

    #[test]
    fn navigation_panel_keys() {
        let app = App::default();
        assert!(app.focus.is_navigation());
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::FocusContent
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
    }
}
