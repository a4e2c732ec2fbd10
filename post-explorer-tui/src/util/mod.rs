//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务无关的启动 / 退出代码：
//!
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化、恢复与 panic 钩子
//!
//!
//!     终端：
//!         · init_terminal()     启用原始模式并进入备用屏幕
//!         · restore_terminal()  退出备用屏幕、恢复原始模式与光标
//!         · install_panic_hook()
//!             panic 时先恢复终端再打印信息，否则 panic 信息会被备用屏幕吞掉
//!
//!
//!     日志：
//!         stdout 属于界面，日志写入缓存目录下的文件：
//!
//!             ~/.cache/post-explorer/post-explorer.log     (Linux)
//!
//!         级别由 RUST_LOG 控制，默认 info。
//!         各库 crate 只使用 `log` 门面，由 tracing-subscriber 统一收集。
//!
//!
//! 使用方式见 src/main.rs
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
