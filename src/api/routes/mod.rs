//! API routes module

pub mod chat;
pub mod session;
pub mod speak;
mod web;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Browser page
        .merge(web::router())
        // Chat routes
        .nest("/chat", chat::router())
        // Speech synthesis routes
        .nest("/speak", speak::router())
        // History and reset
        .merge(session::router())
}
