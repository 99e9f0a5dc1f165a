pub mod error;
pub mod messages;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use corkboard_db::Database;

pub struct AppStateInner {
    pub db: Database,
}

pub type AppState = Arc<AppStateInner>;

/// The whole HTTP surface: four routes onto one table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/messages", get(messages::list_messages))
        .route("/messages", post(messages::create_message))
        .route("/messages/{id}", patch(messages::update_message))
        .route("/messages/{id}", delete(messages::delete_message))
        .with_state(state)
}
