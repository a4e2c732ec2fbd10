//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend → Update 之间的桥梁。
//! 所有的用户操作和请求结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod content;        // 内容面板子消息
//!         mod fetch;          // 后台请求结果
//!         mod navigation;     // 导航面板子消息
//!
//!
//!     消息来源：
//!
//!         按键 ──▶ event::handle_event() ──▶ AppMessage::{Quit, Content(..), ...}
//!
//!         请求完成 ──▶ Backend 通道 ──▶ AppMessage::Fetched(FetchMessage)
//!
//!     两类消息都在主循环线程上交给 update::update() 处理。
//!

mod app;
mod content;
mod fetch;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use fetch::FetchMessage;
pub use navigation::NavigationMessage;
