use crate::blog::Post;
use crate::state::SharedState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct ListQuery {
    #[serde(default)]
    engine: Option<String>,
}

pub(super) async fn get(
    State(state): SharedState,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Post>> {
    let posts = state.posts.read().await;

    Json(match query.engine {
        Some(engine) => posts.list_by_category(&engine),
        None => posts.list().to_vec(),
    })
}
