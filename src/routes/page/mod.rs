use crate::state::NestedRouter;
use axum::routing::{get, post};

mod category;
mod delete;
mod edit;
mod home;
mod new;
mod post;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(home::get))
        .route("/category/:engine", get(category::get))
        .route("/posts/:id", get(post::get))
        .route("/new", get(new::get).post(new::post))
        .route("/edit/:id", get(edit::get).post(edit::post))
        .route("/delete/:id", post(delete::post))
}
