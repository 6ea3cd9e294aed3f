use crate::blog::PostID;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use maud::Markup;

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Markup, Response> {
    // render outside the lock
    let post = state
        .posts
        .read()
        .await
        .find_by_id(&post_id)
        .cloned()
        .map_err(IntoResponse::into_response)?;

    let content = crate::render::post_body(&post)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(crate::views::post(&post, &content))
}
