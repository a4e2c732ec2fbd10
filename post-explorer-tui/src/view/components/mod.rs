//! 可复用组件

pub mod fetch_panel;
pub mod help;
pub mod navigation;
pub mod search_box;
pub mod statusbar;
