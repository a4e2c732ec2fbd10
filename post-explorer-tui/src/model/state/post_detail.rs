use post_explorer_core::{
    next_post_id, previous_post_id, FetchCoordinator, Post, RacePolicy,
};

use crate::model::ContentFocus;

/// 文章详情状态
#[derive(Debug)]
pub struct PostDetailState {
    /// 路由携带的原始 ID
    pub id: String,
    pub fetch: FetchCoordinator<Post>,
    /// 「按 ID 搜索」输入框，初始为路由 ID
    pub search_input: String,
    pub focus: ContentFocus,
}

impl PostDetailState {
    pub fn new(id: impl Into<String>, policy: RacePolicy) -> Self {
        let id = id.into();
        Self {
            search_input: id.clone(),
            id,
            fetch: FetchCoordinator::new(policy),
            focus: ContentFocus::Body,
        }
    }

    /// 已显示的文章
    pub fn post(&self) -> Option<&Post> {
        self.fetch.state().data()
    }

    /// 上一篇 ID；未显示文章或已是第一篇时为 `None`
    pub fn previous_id(&self) -> Option<u64> {
        self.post().and_then(|post| previous_post_id(post.id))
    }

    /// 下一篇 ID；未显示文章时为 `None`
    pub fn next_id(&self) -> Option<u64> {
        self.post().map(|post| next_post_id(post.id))
    }

    /// 提交搜索框：为空时回退到路由 ID，否则原样使用
    pub fn submitted_id(&self) -> String {
        if self.search_input.is_empty() {
            self.id.clone()
        } else {
            self.search_input.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showing(id: u64) -> PostDetailState {
        let mut state = PostDetailState::new(id.to_string(), RacePolicy::default());
        let ticket = state.fetch.begin();
        state.fetch.resolve(
            ticket,
            Ok(Post {
                id,
                user_id: Some(1),
                title: "t".into(),
                body: "b".into(),
            }),
        );
        state
    }

    #[test]
    fn navigation_needs_a_displayed_post() {
        let mut state = PostDetailState::new("5", RacePolicy::default());
        state.fetch.begin();
        assert_eq!(state.previous_id(), None);
        assert_eq!(state.next_id(), None);
    }

    #[test]
    fn first_post_has_no_previous() {
        let state = showing(1);
        assert_eq!(state.previous_id(), None);
        assert_eq!(state.next_id(), Some(2));
    }

    #[test]
    fn last_known_post_still_has_next() {
        let state = showing(100);
        assert_eq!(state.previous_id(), Some(99));
        assert_eq!(state.next_id(), Some(101));
    }

    #[test]
    fn empty_search_falls_back_to_route_id() {
        let mut state = PostDetailState::new("7", RacePolicy::default());
        assert_eq!(state.submitted_id(), "7");
        state.search_input.clear();
        assert_eq!(state.submitted_id(), "7");
        state.search_input.push_str(" 12");
        assert_eq!(state.submitted_id(), " 12");
    }
}
