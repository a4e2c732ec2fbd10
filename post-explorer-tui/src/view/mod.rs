//!
//! src/view/mod.rs
//! View 层：只读 Model，渲染一帧
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 + 导航 | 内容 + 状态栏
//!         pub mod theme;      // 颜色方案与常用样式
//!         mod components;     // 导航、状态栏、帮助弹窗、搜索框、加载面板
//!         mod pages;          // 各页面
//!
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ 标题栏：应用名 · 当前路径                     │
//!     ├──────────┬───────────────────────────────────┤
//!     │          │ ┌ 搜索框 ───────────────────────┐ │
//!     │  导航    │ └───────────────────────────────┘ │
//!     │  (20%)   │   列表 / 详情 / 骨架屏 / 错误    │
//!     │          │              (80%)                │
//!     ├──────────┴───────────────────────────────────┤
//!     │ 状态栏：快捷键提示 │ 状态消息                 │
//!     └──────────────────────────────────────────────┘
//!
//!
//!     页面内容完全由 FetchState 决定：
//!         Idle / Loading  → 骨架屏
//!         Failure(msg)    → 错误面板（标题 + 消息 + Try Again）
//!         Success(data)   → 列表或正文（过滤后为空时显示空状态）
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

#[cfg(test)]
mod tests {
    use post_explorer_core::{FetchError, Post, RacePolicy, Route, User};
    use ratatui::{backend::TestBackend, style::Modifier, Terminal};

    use super::*;
    use crate::message::FetchMessage;
    use crate::model::{App, Effect, FocusPanel};
    use crate::update;

    /// 把一帧渲染成纯文本
    fn draw(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal =
            Terminal::new(backend).unwrap_or_else(|e| panic!("terminal: {e}"));
        terminal
            .draw(|frame| render(app, frame))
            .unwrap_or_else(|e| panic!("draw: {e}"));

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn resolve_with(app: &mut App, users: Vec<User>, post: Result<Post, FetchError>) {
        for effect in app.take_effects() {
            let msg = match effect {
                Effect::LoadUsers(ticket) => FetchMessage::Users {
                    ticket,
                    result: Ok(users.clone()),
                },
                Effect::LoadPosts(ticket) => FetchMessage::Posts {
                    ticket,
                    result: Ok(Vec::new()),
                },
                Effect::LoadPost { ticket, .. } => FetchMessage::Post {
                    ticket,
                    result: post.clone(),
                },
            };
            update::update(app, crate::message::AppMessage::Fetched(msg));
        }
    }

    fn leanne() -> User {
        User {
            id: 1,
            name: "Leanne Graham".into(),
            email: "Sincere@april.biz".into(),
            phone: "1-770-736-8031 x56442".into(),
            website: "hildegard.org".into(),
        }
    }

    fn first_post() -> Post {
        Post {
            id: 1,
            user_id: Some(1),
            title: "sunt aut facere".into(),
            body: "quia et suscipit\nsuscipit recusandae".into(),
        }
    }

    #[test]
    fn loading_frame_comes_first() {
        let app = App::new(Route::Users, RacePolicy::default());
        let screen = draw(&app);
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("/users"));
    }

    #[test]
    fn users_list_and_empty_state() {
        let mut app = App::new(Route::Users, RacePolicy::default());
        app.focus = FocusPanel::Content;
        resolve_with(&mut app, vec![leanne()], Ok(first_post()));

        let screen = draw(&app);
        assert!(screen.contains("Leanne Graham"));
        assert!(screen.contains("Sincere@april.biz"));

        for ch in "zzz".chars() {
            update::update(
                &mut app,
                crate::message::AppMessage::Content(crate::message::ContentMessage::Input(ch)),
            );
        }
        let screen = draw(&app);
        assert!(screen.contains("No Users Found"));
        assert!(!screen.contains("Leanne Graham"));
    }

    #[test]
    fn error_panel_shows_message_and_retry() {
        let mut app = App::new(Route::post("101"), RacePolicy::default());
        resolve_with(
            &mut app,
            Vec::new(),
            Err(FetchError::FetchFailed(
                "Request failed with status code 404".into(),
            )),
        );

        let screen = draw(&app);
        assert!(screen.contains("Error Loading Post"));
        assert!(screen.contains("Request failed with status code 404"));
        assert!(screen.contains("Try Again"));
    }

    #[test]
    fn post_detail_shows_body_and_buttons() {
        let mut app = App::new(Route::post("1"), RacePolicy::default());
        resolve_with(&mut app, Vec::new(), Ok(first_post()));

        let screen = draw(&app);
        assert!(screen.contains("sunt aut facere"));
        assert!(screen.contains("suscipit recusandae"));
        assert!(screen.contains("Previous Post"));
        assert!(screen.contains("Next Post"));
        assert!(screen.contains("/posts/1"));
    }

    /// 标签首字符所在单元格的修饰符
    fn label_modifier(app: &App, label: &str) -> Modifier {
        let backend = TestBackend::new(120, 40);
        let mut terminal =
            Terminal::new(backend).unwrap_or_else(|e| panic!("terminal: {e}"));
        terminal
            .draw(|frame| render(app, frame))
            .unwrap_or_else(|e| panic!("draw: {e}"));

        let buffer = terminal.backend().buffer();
        let chars: Vec<char> = label.chars().collect();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width.saturating_sub(chars.len() as u16) {
                let matched = chars
                    .iter()
                    .enumerate()
                    .all(|(i, ch)| buffer[(x + i as u16, y)].symbol() == ch.to_string());
                if matched {
                    return buffer[(x, y)].modifier;
                }
            }
        }
        panic!("label {label:?} not rendered");
    }

    #[test]
    fn previous_button_is_dimmed_on_first_post() {
        let mut app = App::new(Route::post("1"), RacePolicy::default());
        resolve_with(&mut app, Vec::new(), Ok(first_post()));
        assert!(label_modifier(&app, "Previous Post").contains(Modifier::DIM));
        assert!(!label_modifier(&app, "Next Post").contains(Modifier::DIM));

        let second = Post {
            id: 2,
            ..first_post()
        };
        let mut app = App::new(Route::post("2"), RacePolicy::default());
        resolve_with(&mut app, Vec::new(), Ok(second));
        assert!(!label_modifier(&app, "Previous Post").contains(Modifier::DIM));
    }

    #[test]
    fn landing_and_not_found_render() {
        let app = App::default();
        let screen = draw(&app);
        assert!(screen.contains("Explore Users"));
        assert!(screen.contains("Key Features"));

        let app = App::new(Route::parse("/a/b/c"), RacePolicy::default());
        let screen = draw(&app);
        assert!(screen.contains("Page Not Found"));
        assert!(screen.contains("/a/b/c"));
    }

    #[test]
    fn help_overlay() {
        let mut app = App::default();
        app.show_help = true;
        assert!(draw(&app).contains("Keyboard Shortcuts"));
    }
}
