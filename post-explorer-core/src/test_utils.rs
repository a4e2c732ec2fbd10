//! 测试辅助模块
//!
//! 提供 mock 数据源和便捷的测试工厂方法。

use std::collections::HashMap;

use async_trait::async_trait;
use post_explorer_provider::{DataSource, Post, ProviderError, Result, User};
use tokio::sync::{oneshot, Mutex};

// ===== 工厂方法 =====

pub fn user(id: u64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
        website: String::new(),
    }
}

pub fn post(id: u64, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id: Some(1),
        title: title.to_string(),
        body: body.to_string(),
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Leanne Graham", "Sincere@april.biz"),
        user(2, "Ervin Howell", "Shanna@melissa.tv"),
        user(3, "Clementine Bauch", "Nathan@yesenia.net"),
    ]
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        post(1, "sunt aut facere", "quia et suscipit reprehenderit"),
        post(2, "qui est esse", "est rerum tempore vitae"),
        post(3, "ea molestias quasi", "et iusto sed quo iure"),
    ]
}

pub fn not_found(id: &str) -> ProviderError {
    ProviderError::HttpStatus {
        status: 404,
        url: format!("http://mock/posts/{id}"),
    }
}

// ===== MockDataSource =====

pub struct MockDataSource {
    users: Result<Vec<User>>,
    posts: Result<Vec<Post>>,
    /// `get_post` 的请求记录（按到达顺序）
    requests: Mutex<Vec<String>>,
    /// 按 ID 挂起的响应，`release` 之前不返回
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self {
            users: Ok(sample_users()),
            posts: Ok(sample_posts()),
            requests: Mutex::new(Vec::new()),
            gates: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_users(mut self, users: Result<Vec<User>>) -> Self {
        self.users = users;
        self
    }

    pub fn with_posts(mut self, posts: Result<Vec<Post>>) -> Self {
        self.posts = posts;
        self
    }

    /// 挂起对 `id` 的下一次请求，发送端用于放行
    pub async fn hold(&self, id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().await.insert(id.to_string(), rx);
        tx
    }

    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    fn base_url(&self) -> &str {
        "http://mock"
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.users.clone()
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.posts.clone()
    }

    async fn get_post(&self, id: &str) -> Result<Post> {
        self.requests.lock().await.push(id.to_string());

        let gate = self.gates.lock().await.remove(id);
        if let Some(gate) = gate {
            // 发送端被丢弃时同样放行
            let _ = gate.await;
        }

        let posts = self.posts.clone()?;
        posts
            .into_iter()
            .find(|post| post.id.to_string() == id)
            .ok_or_else(|| not_found(id))
    }
}
