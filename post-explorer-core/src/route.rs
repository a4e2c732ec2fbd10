//! Router
//!
//! 路径到页面的映射，以及前进 / 后退历史。
//!
//! ```text
//!   /              → Landing
//!   /users         → Users
//!   /posts         → Posts
//!   /posts/{id}    → PostDetail
//!   /user/{id}     → PostDetail
//!   /{id}          → PostDetail
//!   其他            → NotFound
//! ```

use std::borrow::Cow;
use std::fmt;

/// 应用内路由
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Users,
    Posts,
    /// `id` 为解码后的原始文本，不做数字校验
    PostDetail { id: String },
    NotFound { path: String },
}

impl Route {
    pub fn post(id: impl Into<String>) -> Self {
        Self::PostDetail { id: id.into() }
    }

    /// 解析路径；未知路径得到 `NotFound`
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Landing,
            ["users"] => Self::Users,
            ["posts"] => Self::Posts,
            ["posts" | "user", id] | [id] => Self::post(decode(id)),
            _ => Self::NotFound {
                path: trimmed.to_string(),
            },
        }
    }

    /// 规范路径
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Users => "/users".to_string(),
            Self::Posts => "/posts".to_string(),
            Self::PostDetail { id } => format!("/posts/{}", urlencoding::encode(id)),
            Self::NotFound { path } => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_string(), Cow::into_owned)
}

/// 浏览历史
#[derive(Debug, Clone)]
pub struct History {
    back: Vec<Route>,
    current: Route,
    forward: Vec<Route>,
}

impl History {
    pub fn new(start: Route) -> Self {
        Self {
            back: Vec::new(),
            current: start,
            forward: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// 导航到新路由并清空前进栈
    pub fn push(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.current, route);
        self.back.push(previous);
        self.forward.clear();
    }

    /// 后退，返回新的当前路由
    pub fn back(&mut self) -> Option<&Route> {
        let previous = self.back.pop()?;
        let current = std::mem::replace(&mut self.current, previous);
        self.forward.push(current);
        Some(&self.current)
    }

    /// 前进，返回新的当前路由
    pub fn forward(&mut self) -> Option<&Route> {
        let next = self.forward.pop()?;
        let current = std::mem::replace(&mut self.current, next);
        self.back.push(current);
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Landing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixed_routes() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/users"), Route::Users);
        assert_eq!(Route::parse("/users/"), Route::Users);
        assert_eq!(Route::parse("/posts"), Route::Posts);
    }

    #[test]
    fn detail_routes_share_one_screen() {
        assert_eq!(Route::parse("/posts/7"), Route::post("7"));
        assert_eq!(Route::parse("/user/3"), Route::post("3"));
        assert_eq!(Route::parse("/3"), Route::post("3"));
    }

    #[test]
    fn id_is_kept_as_text() {
        assert_eq!(Route::parse("/posts/abc"), Route::post("abc"));
        assert_eq!(Route::parse("/posts/1%202"), Route::post("1 2"));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/posts/1/comments"),
            Route::NotFound {
                path: "/posts/1/comments".into()
            }
        );
        assert!(matches!(Route::parse("/a/b"), Route::NotFound { .. }));
    }

    #[test]
    fn path_encodes_the_id() {
        assert_eq!(Route::post("1 2").path(), "/posts/1%202");
        assert_eq!(Route::parse(&Route::post("a/b").path()), Route::post("a/b"));
        assert_eq!(Route::Users.to_string(), "/users");
    }

    #[test]
    fn back_and_forward() {
        let mut history = History::default();
        assert!(!history.can_go_back());
        assert_eq!(history.back(), None);

        history.push(Route::Users);
        history.push(Route::post("1"));

        assert_eq!(history.back(), Some(&Route::Users));
        assert_eq!(history.back(), Some(&Route::Landing));
        assert_eq!(history.back(), None);
        assert!(history.can_go_forward());

        assert_eq!(history.forward(), Some(&Route::Users));
        assert_eq!(history.forward(), Some(&Route::post("1")));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn push_clears_forward() {
        let mut history = History::new(Route::Posts);
        history.push(Route::post("1"));
        history.back();
        assert!(history.can_go_forward());

        history.push(Route::post("2"));
        assert!(!history.can_go_forward());
        assert_eq!(history.current(), &Route::post("2"));
    }
}
