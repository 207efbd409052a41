use super::rest::Order;
use super::{ApiClient, ApiResult};
use crate::models::{NewPost, Post};
use serde::Serialize;

pub(crate) const POSTS_TABLE: &str = "posts";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub(crate) struct FavoritePatch {
    pub is_favorite: bool,
}

impl ApiClient {
    /// Newest first.
    pub async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        self.select_all(POSTS_TABLE, "created_at", Order::Desc).await
    }

    pub async fn insert_post(&self, post: &NewPost) -> ApiResult<()> {
        self.insert_rows(POSTS_TABLE, post).await
    }

    pub async fn set_post_favorite(&self, id: &str, is_favorite: bool) -> ApiResult<()> {
        self.update_by_id(POSTS_TABLE, id, &FavoritePatch { is_favorite })
            .await
    }

    pub async fn delete_post(&self, id: &str) -> ApiResult<()> {
        self.delete_by_id(POSTS_TABLE, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_patch_is_single_field() {
        let v = serde_json::to_value(FavoritePatch { is_favorite: true }).expect("should serialize");
        assert_eq!(v, serde_json::json!({ "is_favorite": true }));
    }
}
