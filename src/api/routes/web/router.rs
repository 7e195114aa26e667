//! Router for the browser page

use std::sync::{Arc, RwLock};

use axum::{Router, response::Html, routing::get};

use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

const INDEX_HTML: &str = include_str!("../../../../static/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Create the web router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(index))
}
