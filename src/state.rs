use crate::config::Config;
use crate::session::SessionStore;

/// Shared by every worker thread for the lifetime of the server.
pub struct App {
    pub config: Config,
    pub sessions: SessionStore,
}

impl App {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.session_ttl_secs);
        Self { config, sessions }
    }
}
