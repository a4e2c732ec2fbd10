//! `JsonPlaceholderClient` 针对本地桩服务器的集成测试

mod common;

use std::time::Duration;

use common::{unused_local_url, StubServer, POST_1_JSON, USERS_JSON};
use post_explorer_provider::{ClientOptions, DataSource, JsonPlaceholderClient, ProviderError};

#[tokio::test]
async fn list_users_decodes_collection() {
    let server = StubServer::start().await;
    server.respond("/users", 200, USERS_JSON).await;

    let users = server.client().list_users().await.expect("list_users 调用失败");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[1].email, "Shanna@melissa.tv");
    assert_eq!(server.requested_paths().await, vec!["/users".to_string()]);
}

#[tokio::test]
async fn list_posts_decodes_collection() {
    let body = format!("[{POST_1_JSON}]");
    let server = StubServer::start().await;
    server.respond("/posts", 200, &body).await;

    let posts = server.client().list_posts().await.expect("list_posts 调用失败");

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].user_id, Some(1));
}

#[tokio::test]
async fn get_post_by_id() {
    let server = StubServer::start().await;
    server.respond("/posts/1", 200, POST_1_JSON).await;

    let post = server.client().get_post("1").await.expect("get_post 调用失败");

    assert_eq!(post.id, 1);
    assert_eq!(post.title, "sunt aut facere");
}

#[tokio::test]
async fn missing_post_is_status_error() {
    let server = StubServer::start().await;

    let result = server.client().get_post("101").await;

    match result {
        Err(ProviderError::HttpStatus { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/posts/101"), "unexpected url: {url}");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert_eq!(server.requested_paths().await, vec!["/posts/101".to_string()]);
}

#[tokio::test]
async fn non_numeric_id_is_requested_as_is() {
    let server = StubServer::start().await;

    let result = server.client().get_post("abc").await;

    assert!(matches!(result, Err(ProviderError::HttpStatus { status: 404, .. })));
    assert_eq!(server.requested_paths().await, vec!["/posts/abc".to_string()]);
}

#[tokio::test]
async fn server_error_is_status_error() {
    let server = StubServer::start().await;
    server.respond("/users", 500, r#"{"error":"boom"}"#).await;

    let result = server.client().list_users().await;

    assert!(matches!(result, Err(ProviderError::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = StubServer::start().await;
    server.respond("/users", 200, "<html>oops</html>").await;

    let result = server.client().list_users().await;

    assert!(matches!(result, Err(ProviderError::Parse { .. })));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let client = JsonPlaceholderClient::new(ClientOptions {
        base_url: unused_local_url().await,
        connect_timeout: Duration::from_secs(2),
        request_timeout: None,
    })
    .expect("创建客户端失败");

    let result = client.list_users().await;

    match result {
        Err(ref e @ ProviderError::Network { .. }) => {
            assert!(e.message().is_some(), "transport should describe the failure");
        }
        other => panic!("expected Network, got {other:?}"),
    }
}
