pub mod composer;
pub mod prompt;

pub use composer::{Composer, Language, Turn, prepare_turn};
