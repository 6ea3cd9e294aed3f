use crate::blog::PostID;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::response::Redirect;

// unknown ids redirect the same as known ones
pub(super) async fn post(State(state): SharedState, Path(post_id): Path<PostID>) -> Redirect {
    state.posts.write().await.delete_by_id(&post_id);
    Redirect::to("/")
}
