//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::post,
};

use super::public;
use crate::ai::{Composer, Language, prepare_turn};
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::session;

type SharedState = Arc<RwLock<AppState>>;

/// Answer the next message in the conversation
async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::ChatRequest>, JsonRejection>,
) -> Result<Json<public::ChatResponse>, ApiError> {
    let Json(payload) = payload?;
    let language = Language::from(payload.language.as_str());
    let timestamp = session::timestamp();

    let (turn, composer) = {
        let mut shared_state = state.write().expect("Unable to write share state");
        let AppState {
            session,
            updates,
            config,
        } = &mut *shared_state;
        let turn = prepare_turn(session, updates, &payload.message, language)?;
        (turn, Composer::from_config(config))
    };

    // The lock is released while waiting on the model. The exchange is
    // only recorded once there is a reply so a failed completion
    // leaves the session as it was.
    let reply = composer.respond(turn).await?;

    state
        .write()
        .expect("Unable to write share state")
        .session
        .record_exchange(&payload.message, &reply, &timestamp);

    Ok(Json(public::ChatResponse::new(&reply)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
