// src/session/store.rs
use crate::errors::ServerError;
use crate::letters::{ProcessedListing, Scheme};
use crate::session::token::{generate_token_default, hash_token};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Everything one browser has uploaded. Replaced wholesale by the next upload.
#[derive(Debug, Clone)]
pub struct Session {
    pub file_name: Option<String>,
    pub headers: Vec<String>,
    pub scheme: Scheme,
    pub listings: Vec<ProcessedListing>,
}

struct Entry {
    session: Session,
    expires_at: i64,
}

/// In-memory session map keyed by token hash. Nothing is written to disk.
pub struct SessionStore {
    ttl_secs: i64,
    entries: Mutex<HashMap<[u8; 32], Entry>>,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Provides the locked map to the closure, dropping expired sessions first.
    fn with_entries<T, F>(&self, now: i64, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut HashMap<[u8; 32], Entry>) -> T,
    {
        let mut entries = self.entries.lock().map_err(|_| ServerError::InternalError)?;

        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        if entries.len() < before {
            debug!(expired = before - entries.len(), "purged sessions");
        }

        Ok(f(&mut *entries))
    }

    /// Stores `session` under `token` when that token is live, otherwise
    /// under a fresh token. Returns the fresh token, or `None` if the
    /// existing one was reused.
    pub fn upsert(
        &self,
        token: Option<&str>,
        session: Session,
        now: i64,
    ) -> Result<Option<String>, ServerError> {
        let expires_at = now.saturating_add(self.ttl_secs);

        self.with_entries(now, |entries| {
            if let Some(entry) = token.and_then(|t| entries.get_mut(&hash_token(t))) {
                *entry = Entry { session, expires_at };
                return None;
            }

            let fresh = generate_token_default();
            entries.insert(hash_token(&fresh), Entry { session, expires_at });
            Some(fresh)
        })
    }

    /// Runs `f` against the live session, or returns `None` when there is none.
    pub fn with_session<T, F>(&self, token: &str, now: i64, f: F) -> Result<Option<T>, ServerError>
    where
        F: FnOnce(&Session) -> T,
    {
        self.with_entries(now, |entries| {
            entries.get(&hash_token(token)).map(|e| f(&e.session))
        })
    }

    pub fn active_count(&self, now: i64) -> Result<usize, ServerError> {
        self.with_entries(now, |entries| entries.len())
    }
}
