use crate::blog::{PostID, PostUpdate};
use crate::state::posts::StoreError;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use maud::Markup;

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Markup, StoreError> {
    let posts = state.posts.read().await;
    let post = posts.find_by_id(&post_id)?;

    Ok(crate::views::form(Some(post)))
}

pub(super) async fn post(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
    Form(update): Form<PostUpdate>,
) -> Result<Redirect, StoreError> {
    state.posts.write().await.update_by_id(&post_id, update)?;

    Ok(Redirect::to("/"))
}
