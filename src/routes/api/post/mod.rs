use crate::state::NestedRouter;
use axum::routing::get;

mod list;
mod meta;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(list::get))
        .route("/:id", get(meta::get))
}
