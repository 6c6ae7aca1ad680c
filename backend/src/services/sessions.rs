//! In-memory chat session store
//!
//! Each session keeps a rolling window of its most recent turns. Mutation of
//! a single session happens under that session's map-shard lock, so an
//! append and its truncation are never observed half-done. Idle sessions are
//! dropped lazily whenever a new session is created.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use shared::{ChatRole, ChatTurn};

use crate::config::SessionConfig;

/// Limits applied by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_turns: usize,
    pub max_sessions: usize,
    pub idle_ttl: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for SessionLimits {
    fn from(config: &SessionConfig) -> Self {
        Self {
            max_turns: config.max_turns.max(1),
            max_sessions: config.max_sessions.max(1),
            idle_ttl: Duration::from_secs(config.idle_ttl_secs),
        }
    }
}

#[derive(Debug)]
struct Session {
    turns: VecDeque<ChatTurn>,
    last_active: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            turns: VecDeque::new(),
            last_active: Instant::now(),
        }
    }
}

/// Shared session store, cheap to clone
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
    limits: SessionLimits,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionLimits::default())
    }
}

impl SessionStore {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            limits,
        }
    }

    /// Turns of a session, oldest first; an unknown id starts an empty session
    pub fn get_session(&self, id: &str) -> Vec<ChatTurn> {
        self.make_room_for(id);

        let mut session = self.sessions.entry(id.to_string()).or_insert_with(Session::new);
        session.last_active = Instant::now();
        session.turns.iter().cloned().collect()
    }

    /// Append a turn, keeping only the most recent `max_turns`
    pub fn add_message(&self, id: &str, role: ChatRole, content: impl Into<String>) {
        self.make_room_for(id);

        let mut session = self.sessions.entry(id.to_string()).or_insert_with(Session::new);
        session.last_active = Instant::now();
        session.turns.push_back(ChatTurn::new(role, content));
        while session.turns.len() > self.limits.max_turns {
            session.turns.pop_front();
        }
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    /// Drop sessions idle longer than the TTL, returning how many were removed
    pub fn evict_expired(&self) -> usize {
        let before = self.sessions.len();
        let ttl = self.limits.idle_ttl;
        self.sessions.retain(|_, session| session.last_active.elapsed() < ttl);
        before.saturating_sub(self.sessions.len())
    }

    /// Evict before `id` is created so the store stays within its limits
    fn make_room_for(&self, id: &str) {
        if self.sessions.contains_key(id) {
            return;
        }

        let expired = self.evict_expired();
        if expired > 0 {
            tracing::debug!(expired, "dropped idle chat sessions");
        }

        while self.sessions.len() >= self.limits.max_sessions {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|entry| entry.value().last_active)
                .map(|entry| entry.key().clone());

            match oldest {
                Some(key) => {
                    self.sessions.remove(&key);
                    tracing::debug!(session_id = %key, "evicted least recently used chat session");
                }
                None => break,
            }
        }
    }
}
