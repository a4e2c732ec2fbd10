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
//！│  │   │   层    │          └─────▲─────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ─│────────┘      └────┬─────┘         │   │
//！│  │        │                      │                    │ Effect        │   │
//！│  └────────│──────────────────────│────────────────────│───────────────┘   │
//！│           │                      │ channel            │                   │
//！│           ▼                      │                    ▼                   │
//！│      ┌─────────┐                 │              ┌──────────┐              │
//！│      │  终端   │                 └───────────── │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │post-explorer-core │           │
//！│                                           │  ExplorerService  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：配置与远程读取
//!
//! Backend 层与 UI 解耦：它不知道页面，只执行 Effect 并把结果送回。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（只读 JSON）
//!         mod explorer_backend;   // 后台加载执行器
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/post-explorer/config.json
//!
//!         {
//!             "base_url": "https://jsonplaceholder.typicode.com",
//!             "connect_timeout_secs": 10,
//!             "request_timeout_secs": null,
//!             "theme": "dark",
//!             "language": "en-US",
//!             "start_route": "/",
//!             "discard_stale_responses": false
//!         }
//!
//!     文件不存在 → 默认值；文件损坏 → 日志警告 + 默认值。
//!     程序从不写入该文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、加载执行器（ExplorerBackend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有一个多线程 tokio 运行时和 ExplorerService。
//!
//!         execute(effect)     在运行时上 spawn 一个任务
//!         try_recv()          主循环每帧取出已完成的结果
//!
//!     每个结果都带回发起时的 FetchTicket，由 Update 层判断是否仍然有效。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在用户列表上按 Enter
//!         ↓
//!     Update 层 navigate(/posts/1)，页面进入 Loading，排入 Effect::LoadPost
//!         ↓
//!     主循环 execute_all() → tokio::spawn
//!         ↓
//!     ExplorerService::load_post("1") → JsonPlaceholderClient → GET /posts/1
//!         ↓
//!     FetchMessage::Post { ticket, result } 送入 channel
//!         ↓
//!     下一帧 try_recv() → Update 层 resolve()
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod explorer_backend;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use explorer_backend::ExplorerBackend;
