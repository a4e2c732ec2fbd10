//! 页面视图

pub mod landing;
pub mod not_found;
pub mod post_detail;
pub mod posts;
pub mod users;
