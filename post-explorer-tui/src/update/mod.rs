//!
//! src/update/mod.rs
//! Update 层：根据 Message 修改 Model
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;        // 内容面板消息
//!         mod fetch;          // 请求结果
//!         mod navigation;     // 导航面板消息
//!
//!
//!     update() 是同步的纯状态修改：需要远程读取时，
//!     只调用 App::begin_load() 把 Effect 排入队列，
//!     由主循环交给 Backend 执行。
//!

mod content;
mod fetch;
mod navigation;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::FocusNavigation => {
            app.focus = FocusPanel::Navigation;
        }

        AppMessage::FocusContent => {
            app.focus = FocusPanel::Content;
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Fetched(fetch_msg) => {
            fetch::update(app, fetch_msg);
        }

        AppMessage::GoBack => {
            if !app.go_back() {
                app.set_status(t().status.no_back_history);
            }
        }

        AppMessage::GoForward => {
            if !app.go_forward() {
                app.set_status(t().status.no_forward_history);
            }
        }

        AppMessage::Refresh => {
            if app.reload() {
                app.set_status(t().status.refreshing);
            } else {
                app.set_status(t().status.nothing_to_refresh);
            }
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use post_explorer_core::{RacePolicy, Route};

    use super::*;
    use crate::model::{Effect, Page};

    #[test]
    fn refresh_reissues_the_load() {
        let mut app = App::new(Route::Users, RacePolicy::default());
        app.take_effects();

        update(&mut app, AppMessage::Refresh);
        assert!(matches!(app.take_effects().as_slice(), [Effect::LoadUsers(_)]));
        assert!(app.page.is_loading());
        assert_eq!(app.status_message.as_deref(), Some(t().status.refreshing));
    }

    #[test]
    fn refresh_on_landing_only_reports() {
        let mut app = App::default();
        update(&mut app, AppMessage::Refresh);
        assert!(app.take_effects().is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some(t().status.nothing_to_refresh)
        );
    }

    #[test]
    fn back_without_history_reports() {
        let mut app = App::default();
        update(&mut app, AppMessage::GoBack);
        assert!(matches!(app.page, Page::Landing(_)));
        assert_eq!(app.status_message.as_deref(), Some(t().status.no_back_history));
    }

    #[test]
    fn back_and_forward_remount() {
        let mut app = App::default();
        app.navigate(Route::Users);
        update(&mut app, AppMessage::GoBack);
        assert!(matches!(app.page, Page::Landing(_)));
        update(&mut app, AppMessage::GoForward);
        assert!(matches!(app.page, Page::Users(_)));
    }

    #[test]
    fn quit_and_help() {
        let mut app = App::default();
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.show_help);
        update(&mut app, AppMessage::CloseHelp);
        assert!(!app.show_help);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
