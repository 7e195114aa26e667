//! Public types for the session API
use serde::Serialize;

use crate::session::LogEntry;

#[derive(Serialize)]
pub struct HistoryResponse {
    pub history: Vec<LogEntry>,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub status: &'static str,
}

impl ResetResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
