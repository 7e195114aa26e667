//! Canned construction updates returned when the user asks for the
//! project status instead of going to the model.

const KEYWORDS: [&str; 4] = ["update", "progress", "construction", "status"];

const CONSTRUCTION_UPDATES: [&str; 5] = [
    "Foundation work is 75% complete at Tower A",
    "Plumbing installation started on floors 1-3",
    "Electrical wiring is 60% done in the East wing",
    "Painting work scheduled to begin next week",
    "Roofing materials delivered yesterday",
];

#[derive(Debug, Default)]
pub struct UpdateNotifier {
    cursor: usize,
}

impl UpdateNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_update_request(message: &str) -> bool {
        let message = message.to_lowercase();
        KEYWORDS.iter().any(|keyword| message.contains(keyword))
    }

    /// Returns the next canned update if `message` asks for one,
    /// advancing the cursor. Messages that don't match leave the
    /// cursor alone.
    pub fn check(&mut self, message: &str) -> Option<String> {
        if !Self::is_update_request(message) {
            return None;
        }
        let update = CONSTRUCTION_UPDATES[self.cursor];
        self.cursor = (self.cursor + 1) % CONSTRUCTION_UPDATES.len();
        Some(format!("Here's the latest update: {update}"))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
