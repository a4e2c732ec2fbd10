//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ContentMsg│               ▼               │   │
//！│  │   ┌─────────┐          │ NavMsg    │          ┌──────────┐         │   │
//！│  │   │  View   │          │ FetchMsg  │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                     ▲                     │ Effect        │   │
//！│  └────────│─────────────────────│─────────────────────│───────────────┘   │
//！│           │                     │ FetchMsg            ▼                   │
//！│           ▼                     │               ┌──────────┐              │
//！│      ┌─────────┐                └────────────── │ Backend  │              │
//！│      │  终端   │                                │    层    │              │
//！│      │ (Util)  │                                └────┬─────┘              │
//！│      └─────────┘                                     │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ post-explorer-    │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/event/mod.rs
//! Event 层：把终端事件翻译成 AppMessage
//!
//!     poll_event(timeout)         // 等待至多 timeout，返回 crossterm 事件
//!     handle_event(event, &app)   // 依据焦点与当前页面，返回一条 AppMessage
//!
//! 按键只处理 Press，Repeat 与 Release 一律忽略，
//! 保证一次 Enter 只触发一次导航。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
