//! Per-user conversation transcripts.
//!
//! Transcripts are created on first write and capped at a fixed length,
//! oldest entries dropped first. The number of users is capped too: once
//! full, recording for a new user evicts the user written least recently.
//! Nothing is persisted.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;
use tutor_core::Message;

/// Maximum number of entries kept per user.
pub const MAX_HISTORY: usize = 100;

/// Maximum number of users tracked at once.
pub const MAX_USERS: usize = 10_000;

struct Transcript {
    messages: Vec<Message>,
    last_write: u64,
}

/// In-memory transcript store keyed by user id.
pub struct ConversationStore {
    conversations: DashMap<String, Transcript>,
    writes: AtomicU64,
    max_users: usize,
    max_entries: usize,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    /// Creates an empty store with [`MAX_USERS`] users of [`MAX_HISTORY`] entries.
    pub fn new() -> Self {
        Self::with_limits(MAX_USERS, MAX_HISTORY)
    }

    /// Creates an empty store holding at most `max_users` transcripts of
    /// `max_entries` each. Both limits are at least 1.
    pub fn with_limits(max_users: usize, max_entries: usize) -> Self {
        Self {
            conversations: DashMap::new(),
            writes: AtomicU64::new(0),
            max_users: max_users.max(1),
            max_entries: max_entries.max(1),
        }
    }

    /// Appends a message to the user's transcript, creating it if needed.
    pub fn record(&self, user_id: &str, message: Message) {
        if !self.conversations.contains_key(user_id) {
            while self.conversations.len() >= self.max_users {
                if !self.evict_least_recent() {
                    break;
                }
            }
        }

        let stamp = self.writes.fetch_add(1, Ordering::Relaxed);
        let mut transcript = self
            .conversations
            .entry(user_id.to_string())
            .or_insert_with(|| Transcript { messages: Vec::new(), last_write: stamp });
        transcript.last_write = stamp;
        transcript.messages.push(message);
        let overflow = transcript.messages.len().saturating_sub(self.max_entries);
        if overflow > 0 {
            transcript.messages.drain(..overflow);
        }
    }

    /// Removes the transcript with the oldest write. No map guard may be held
    /// by the caller.
    fn evict_least_recent(&self) -> bool {
        let oldest = self
            .conversations
            .iter()
            .min_by_key(|entry| entry.value().last_write)
            .map(|entry| entry.key().clone());
        match oldest {
            Some(user_id) => {
                debug!("Evicting history for {}", user_id);
                self.conversations.remove(&user_id).is_some()
            }
            None => false,
        }
    }

    /// Returns a copy of the user's transcript, empty if unknown.
    pub fn get(&self, user_id: &str) -> Vec<Message> {
        self.conversations
            .get(user_id)
            .map(|t| t.messages.clone())
            .unwrap_or_default()
    }

    /// Drops the user's transcript. Returns false if there was none.
    pub fn clear(&self, user_id: &str) -> bool {
        self.conversations.remove(user_id).is_some()
    }

    /// Number of users with a transcript.
    pub fn user_count(&self) -> usize {
        self.conversations.len()
    }
}
