use crate::state::SharedState;
use axum::extract::State;
use maud::Markup;

pub(super) async fn get(State(state): SharedState) -> Markup {
    let posts = state.posts.read().await;
    crate::views::index(posts.list(), None)
}
