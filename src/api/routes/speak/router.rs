//! Router for the speech API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Json, Response},
    routing::post,
};
use http::header;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::elevenlabs::TextToSpeech;

type SharedState = Arc<RwLock<AppState>>;

/// Synthesize the text and respond with the MP3 audio
async fn speak_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::SpeakRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let tts = {
        let shared_state = state.read().expect("Unable to read share state");
        TextToSpeech::from_config(&shared_state.config)
    };

    let audio = tts.synthesize(&payload.text).await?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}

/// Create the speech router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(speak_handler))
}
