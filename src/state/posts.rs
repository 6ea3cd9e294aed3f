use crate::blog::{NewPost, Post, PostID, PostUpdate};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("post {0} not found")]
    NotFound(PostID),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "Post not found").into_response(),
        }
    }
}

/// Posts in the order they were created.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new() -> PostStore {
        PostStore { posts: Vec::new() }
    }

    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    /// Exact, case-sensitive match on `engine`.
    pub fn list_by_category(&self, engine: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.engine == engine)
            .cloned()
            .collect()
    }

    pub fn create(&mut self, new_post: NewPost) -> Post {
        let id = loop {
            let candidate = crate::blog::get_random_hex_string::<{ crate::blog::POST_ID_BYTES }>();
            if !self.posts.iter().any(|post| post.id == candidate) {
                break candidate;
            }
        };

        let post = Post {
            id,
            title: new_post.title,
            engine: new_post.engine,
            content: new_post.content,
            image: new_post.image,
            created_at: chrono::Utc::now(),
        };
        tracing::info!(post_id = %post.id, engine = %post.engine, "created post");

        self.posts.push(post.clone());
        post
    }

    pub fn find_by_id(&self, post_id: &str) -> Result<&Post, StoreError> {
        self.posts
            .iter()
            .find(|post| post.id == post_id)
            .ok_or_else(|| {
                tracing::debug!(post_id, "post not found");
                StoreError::NotFound(post_id.to_owned())
            })
    }

    /// Merges `update` over the stored post in place. An unknown id leaves the
    /// collection untouched.
    pub fn update_by_id(&mut self, post_id: &str, update: PostUpdate) -> Result<&Post, StoreError> {
        let Some(post) = self.posts.iter_mut().find(|post| post.id == post_id) else {
            tracing::debug!(post_id, "edit for unknown post");
            return Err(StoreError::NotFound(post_id.to_owned()));
        };

        post.apply(update);
        tracing::info!(post_id, "updated post");

        Ok(post)
    }

    /// Returns whether anything was removed. Deleting an unknown id is not an error.
    pub fn delete_by_id(&mut self, post_id: &str) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| post.id != post_id);

        let removed = self.posts.len() != before;
        if removed {
            tracing::info!(post_id, "deleted post");
        } else {
            tracing::debug!(post_id, "delete for unknown post");
        }

        removed
    }
}
