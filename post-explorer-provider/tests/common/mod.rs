//! 共享测试工具：基于 wiremock 的本地 API 桩

#![allow(dead_code)]

use std::time::Duration;

use post_explorer_provider::{ClientOptions, JsonPlaceholderClient};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 本地 API 桩
///
/// 未注册的路径由 wiremock 返回 404，与 JSONPlaceholder 对未知 ID 的响应一致。
pub struct StubServer {
    server: MockServer,
}

impl StubServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// 为 `GET {route}` 注册一个 JSON 响应
    pub async fn respond(&self, route: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_raw(body.as_bytes().to_vec(), "application/json"),
            )
            .mount(&self.server)
            .await;
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub fn client(&self) -> JsonPlaceholderClient {
        JsonPlaceholderClient::new(ClientOptions {
            base_url: self.base_url(),
            connect_timeout: Duration::from_secs(2),
            request_timeout: Some(Duration::from_secs(5)),
        })
        .expect("创建客户端失败")
    }

    /// 已收到的请求路径（按到达顺序）
    pub async fn requested_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect()
    }
}

/// 一个当前没有进程监听的本地地址
pub async fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定本地端口失败");
    let addr = listener.local_addr().expect("读取本地地址失败");
    drop(listener);
    format!("http://{addr}")
}

pub const USERS_JSON: &str = r#"[
  {"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz",
   "phone":"1-770-736-8031 x56442","website":"hildegard.org"},
  {"id":2,"name":"Ervin Howell","username":"Antonette","email":"Shanna@melissa.tv",
   "phone":"010-692-6593 x09125","website":"anastasia.net"}
]"#;

pub const POST_1_JSON: &str = r#"{"userId":1,"id":1,"title":"sunt aut facere","body":"quia et suscipit"}"#;
