pub mod ai;
pub mod api;
pub mod cli;
pub mod core;
pub mod elevenlabs;
pub mod openai;
pub mod session;
pub mod updates;
