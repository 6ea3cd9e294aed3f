use crate::state::SharedState;
use axum::extract::{Path, State};
use maud::Markup;

pub(super) async fn get(State(state): SharedState, Path(engine): Path<String>) -> Markup {
    let posts = state.posts.read().await.list_by_category(&engine);
    crate::views::index(&posts, Some(&engine))
}
