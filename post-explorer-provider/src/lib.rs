//! # post-explorer-provider
//!
//! Read-only typed client for the [JSONPlaceholder](https://jsonplaceholder.typicode.com)
//! `users` and `posts` resources.
//!
//! ## Endpoints
//!
//! | Method | Path | Returns |
//! |--------|------|---------|
//! | `GET` | `/users` | `Vec<User>` |
//! | `GET` | `/posts` | `Vec<Post>` |
//! | `GET` | `/posts/{id}` | `Post` |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use post_explorer_provider::{ClientOptions, DataSource, JsonPlaceholderClient};
//!
//! # async fn example() -> post_explorer_provider::Result<()> {
//! let client = JsonPlaceholderClient::new(ClientOptions::default())?;
//!
//! for user in client.list_users().await? {
//!     println!("{} <{}>", user.name, user.email);
//! }
//!
//! let post = client.get_post("1").await?;
//! println!("#{} {}", post.id, post.title);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::HttpStatus`]: non-2xx answer (e.g. 404 for an unknown post id)
//! - [`ProviderError::Network`]: transport failure
//! - [`ProviderError::Timeout`]: only when a request timeout was configured
//! - [`ProviderError::Parse`]: body is not the expected JSON
//!
//! Nothing is retried automatically.

mod client;
mod error;
mod http_client;
mod traits;
mod types;

pub use client::{
    ClientOptions, JsonPlaceholderClient, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
};
pub use error::{ProviderError, Result};
pub use traits::DataSource;
pub use types::{Post, User};
