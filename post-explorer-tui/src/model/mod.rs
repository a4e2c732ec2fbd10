//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态
//!         mod effect;         // 待执行的远程读取
//!         mod focus;          // 面板焦点 / 内容焦点
//!         mod navigation;     // 左侧导航
//!         mod page;           // 当前页面
//!         pub mod state;      // 各页面状态
//!
//!
//!     App 持有：
//!
//!         history: History        // 路由历史，current() 即当前路由
//!         page: Page              // 由当前路由挂载出的页面状态
//!         effects: Vec<Effect>    // Update 层产生的加载请求
//!
//!     路由变化（navigate / go_back / go_forward / reload）时：
//!
//!         Page::mount(route)      // 丢弃旧状态，创建新的 FetchCoordinator
//!         begin_load()            // 同步进入 Loading，并排入一个 Effect
//!
//!     请求结果只会在主循环的 draw 之后才被应用，
//!     所以 Loading 状态总会先被渲染出来。
//!

mod app;
mod effect;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use effect::Effect;
pub use focus::{ContentFocus, FocusPanel};
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
