//! 各页面状态
//!
//! 每次路由挂载都会创建一份新的页面状态（新的 `FetchCoordinator`、
//! 空的搜索框），离开页面时整份状态被丢弃。

mod landing;
mod list;
mod post_detail;

pub use landing::{LandingCard, LandingState};
pub use list::{PostsState, UsersState};
pub use post_detail::PostDetailState;
