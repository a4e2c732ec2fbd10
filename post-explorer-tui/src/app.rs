//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，按配置创建并挂载起始页面：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Home , Users , Posts],
//!         selected = 0                                    // 与起始路由同步
//!     },
//!     history: History::new(start_route),             // 浏览历史
//!     page: Page::mount(start_route),                 // 当前页面，有远程加载时已进入 Loading
//!     status_message = None,                          // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI（Loading 帧总在结果之前）
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Some(msg) = backend.try_recv() {      // 取出后台已完成的请求
//!         update::update(&mut app , Fetched(msg))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//!     backend.execute_all(app.take_effects())         // 把新排入的加载请求交给后台
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::ExplorerBackend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut ExplorerBackend) -> Result<()> {
    // 起始页面的加载在第一帧之前就已排入
    backend.execute_all(app.take_effects());

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用已返回的请求结果
        while let Some(msg) = backend.try_recv() {
            update::update(app, AppMessage::Fetched(msg));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 执行新排入的加载请求
        backend.execute_all(app.take_effects());
    }

    Ok(())
}
