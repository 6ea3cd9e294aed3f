use crate::blog::NewPost;
use crate::state::SharedState;
use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use maud::Markup;

pub(super) async fn get() -> Markup {
    crate::views::form(None)
}

pub(super) async fn post(State(state): SharedState, Form(new_post): Form<NewPost>) -> Redirect {
    state.posts.write().await.create(new_post);
    Redirect::to("/")
}
