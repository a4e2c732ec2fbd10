//! User & Post Explorer TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与远程读取 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入缓存目录下的文件
//!     LocalConfigService      // 读取配置，设置语言和主题
//!     ExplorerBackend::new()  // 创建 HTTP 客户端与 tokio 运行时
//!     model::App::new()       // 挂载起始路由
//!     init_terminal()         // 进入原始模式 + 备用屏幕
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 终端在配置和后台都就绪后才初始化：
//! 启动失败时错误信息直接打印在正常的终端里。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{ConfigService, ExplorerBackend, LocalConfigService};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志
    let log_path = init_logging();

    // 2. 配置
    let config = LocalConfigService::new().load_or_default();
    log::info!(
        "Language {} ({}), theme {:?}",
        config.language.display_name(),
        config.language.code(),
        config.theme
    );
    i18n::set_language(config.language);
    view::theme::set_theme(config.theme);

    // 3. 后台服务
    let mut backend = ExplorerBackend::new(&config)?;
    log::info!(
        "Starting at {} against {}",
        config.start_route,
        backend.base_url()
    );

    // 4. 创建应用实例
    let mut app = model::App::new(config.start_route(), config.race_policy());

    // 5. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
        if let Some(path) = log_path {
            eprintln!("See {} for details", path.display());
        }
    }

    result
}
