use std::sync::Arc;
use tokio::sync::RwLock;

pub mod posts;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

/// Everything the server holds for its lifetime. Built once in `main` and
/// handed to the router; nothing survives a restart.
#[derive(Debug, Default)]
pub struct State {
    // readers share, create/edit/delete take the write half
    pub posts: RwLock<posts::PostStore>,
}

impl State {
    pub fn new() -> State {
        State {
            posts: RwLock::new(posts::PostStore::new()),
        }
    }
}
