//! Public types for the speech API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: String,
}
