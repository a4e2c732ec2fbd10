use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Post, User};

/// Remote Data Source Trait
///
/// 只读：每个方法对应一次 GET 请求，不做缓存、不做重试。
#[async_trait]
pub trait DataSource: Send + Sync {
    /// API 根地址（用于日志）
    fn base_url(&self) -> &str;

    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>>;

    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// `GET /posts/{id}`
    ///
    /// `id` 按原样发送（仅做路径段编码），不做数字校验；
    /// 服务端拒绝时返回错误。
    async fn get_post(&self, id: &str) -> Result<Post>;
}
