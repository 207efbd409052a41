use crate::api::ApiResult;
use crate::models::Post;
use crate::state::Toast;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HistoryState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub copied_id: Option<String>,
    /// Post awaiting delete confirmation.
    pub confirm_delete: Option<String>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            posts: vec![],
            loading: true,
            copied_id: None,
            confirm_delete: None,
        }
    }
}

impl HistoryState {
    /// A failed load keeps whatever was shown before (nothing, on first mount).
    pub fn finish_load(&mut self, result: ApiResult<Vec<Post>>) -> Option<Toast> {
        self.loading = false;
        match result {
            Ok(posts) => {
                self.posts = posts;
                None
            }
            Err(_) => Some(Toast::error("Failed to load posts")),
        }
    }

    pub fn show_empty_state(&self) -> bool {
        !self.loading && self.posts.is_empty()
    }

    /// New favorite value for `id`, if the post is listed.
    pub fn favorite_target(&self, id: &str) -> Option<bool> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| !p.is_favorite)
    }

    pub fn finish_favorite(&mut self, id: &str, is_favorite: bool, result: ApiResult<()>) -> Toast {
        match result {
            Ok(()) => {
                for post in self.posts.iter_mut().filter(|p| p.id == id) {
                    post.is_favorite = is_favorite;
                }
                if is_favorite {
                    Toast::success("Added to favorites")
                } else {
                    Toast::success("Removed from favorites")
                }
            }
            Err(_) => Toast::error("Failed to update favorite status"),
        }
    }

    pub fn finish_delete(&mut self, id: &str, result: ApiResult<()>) -> Toast {
        self.confirm_delete = None;
        match result {
            Ok(()) => {
                self.posts.retain(|p| p.id != id);
                Toast::success("Post deleted")
            }
            Err(_) => Toast::error("Failed to delete post"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiErrorKind};
    use crate::models::PostType;
    use crate::state::ToastKind;

    fn post(id: &str, is_favorite: bool) -> Post {
        Post {
            id: id.to_string(),
            user_id: None,
            content: format!("content {id}"),
            post_type: PostType::Short,
            theme: "t".to_string(),
            created_at: "2026-10-19T00:00:00Z".to_string(),
            updated_at: "2026-10-19T00:00:00Z".to_string(),
            is_favorite,
        }
    }

    fn backend_error() -> ApiError {
        ApiError {
            kind: ApiErrorKind::Backend,
            message: "Load posts (500): boom".to_string(),
        }
    }

    #[test]
    fn test_failed_load_shows_empty_state_and_toast() {
        let mut state = HistoryState::default();
        assert!(!state.show_empty_state());

        let toast = state.finish_load(Err(backend_error())).expect("should toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Failed to load posts");
        assert!(state.posts.is_empty());
        assert!(state.show_empty_state());
    }

    #[test]
    fn test_favorite_toggle_twice_restores_value() {
        let mut state = HistoryState::default();
        state.finish_load(Ok(vec![post("a", false), post("b", true)]));

        let first = state.favorite_target("a").expect("listed");
        state.finish_favorite("a", first, Ok(()));
        assert!(state.posts[0].is_favorite);

        let second = state.favorite_target("a").expect("listed");
        state.finish_favorite("a", second, Ok(()));
        assert!(!state.posts[0].is_favorite);
        assert!(state.posts[1].is_favorite);
    }

    #[test]
    fn test_failed_favorite_leaves_list_untouched() {
        let mut state = HistoryState::default();
        state.finish_load(Ok(vec![post("a", false)]));
        let before = state.posts.clone();
        let toast = state.finish_favorite("a", true, Err(backend_error()));
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(state.posts, before);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut state = HistoryState::default();
        state.finish_load(Ok(vec![post("a", false), post("b", false)]));
        let before = state.posts.clone();

        state.finish_delete("zzz", Ok(()));
        assert_eq!(state.posts, before);
        assert!(state.favorite_target("zzz").is_none());
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut state = HistoryState::default();
        state.finish_load(Ok(vec![post("a", false), post("b", false)]));
        state.confirm_delete = Some("a".to_string());

        state.finish_delete("a", Ok(()));
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].id, "b");
        assert!(state.confirm_delete.is_none());
    }
}
