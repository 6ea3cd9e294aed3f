use crate::state::NestedRouter;

mod post;

pub fn route() -> NestedRouter {
    axum::Router::new().nest("/posts", post::route())
}
