use crate::core::AppConfig;
use crate::session::Session;
use crate::updates::UpdateNotifier;

pub struct AppState {
    // The single conversation shared by every browser tab
    pub session: Session,
    // Not cleared by a session reset
    pub updates: UpdateNotifier,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Session::new(),
            updates: UpdateNotifier::new(),
            config,
        }
    }
}
