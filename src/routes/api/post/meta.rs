use crate::blog::{Post, PostID};
use crate::state::posts::StoreError;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::Json;

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Json<Post>, StoreError> {
    let posts = state.posts.read().await;
    Ok(Json(posts.find_by_id(&post_id)?.clone()))
}
