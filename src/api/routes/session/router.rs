//! Router for viewing and clearing the conversation

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Get the display log of the whole conversation
async fn history(State(state): State<SharedState>) -> Json<public::HistoryResponse> {
    let history = state
        .read()
        .expect("Unable to read share state")
        .session
        .history()
        .to_vec();
    Json(public::HistoryResponse { history })
}

/// Forget the conversation. The update cursor keeps its position.
async fn reset(State(state): State<SharedState>) -> Json<public::ResetResponse> {
    state
        .write()
        .expect("Unable to write share state")
        .session
        .reset();
    tracing::info!("Conversation reset");
    Json(public::ResetResponse::success())
}

/// Create the session router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/history", get(history))
        .route("/reset", post(reset))
}
