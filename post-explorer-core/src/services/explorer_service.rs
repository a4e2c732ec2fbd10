//! 数据加载服务

use std::sync::Arc;

use post_explorer_provider::{DataSource, Post, ProviderError, User};

use crate::error::{FetchError, FetchResult, Resource};

/// 数据加载服务
///
/// 每个方法对应一次远程读取，错误统一转换为 [`FetchError`]。
#[derive(Clone)]
pub struct ExplorerService {
    source: Arc<dyn DataSource>,
}

impl ExplorerService {
    #[must_use]
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn base_url(&self) -> &str {
        self.source.base_url()
    }

    /// 加载全部用户
    pub async fn load_users(&self) -> FetchResult<Vec<User>> {
        self.source
            .list_users()
            .await
            .map_err(|e| to_fetch_error(&e, Resource::Users))
    }

    /// 加载全部文章
    pub async fn load_posts(&self) -> FetchResult<Vec<Post>> {
        self.source
            .list_posts()
            .await
            .map_err(|e| to_fetch_error(&e, Resource::Posts))
    }

    /// 按原始 ID 文本加载单篇文章
    pub async fn load_post(&self, id: &str) -> FetchResult<Post> {
        self.source
            .get_post(id)
            .await
            .map_err(|e| to_fetch_error(&e, Resource::Post))
    }
}

fn to_fetch_error(err: &ProviderError, resource: Resource) -> FetchError {
    if err.is_expected() {
        log::warn!("{resource:?} load rejected: {err}");
    } else {
        log::error!("{resource:?} load failed: {err}");
    }
    FetchError::from_provider(err, resource)
}
