//! In-memory login attempt tracking.
//!
//! Tracks failed attempts per identifier and blocks an identifier once it
//! exceeds the configured limit inside the block window. State is owned by
//! the tracker value, not a global; the caller decides where it lives.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::config::SecurityConfig;
use crate::hashing::mask_sensitive;

/// Records older than this are dropped by [`LoginAttemptTracker::cleanup`].
const RETENTION_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct LoginAttempt {
    pub identifier: String,
    pub timestamp:  DateTime<Utc>,
}

#[derive(Debug)]
pub struct LoginAttemptTracker {
    config:   SecurityConfig,
    attempts: Vec<LoginAttempt>,
}

impl LoginAttemptTracker {
    pub fn new(config: SecurityConfig) -> Self {
        Self {
            config,
            attempts: Vec::new(),
        }
    }

    /// Record a failed attempt for `identifier`.
    pub fn record(&mut self, identifier: &str) {
        self.record_at(identifier, Utc::now());
    }

    fn record_at(&mut self, identifier: &str, timestamp: DateTime<Utc>) {
        self.attempts.push(LoginAttempt {
            identifier: identifier.to_owned(),
            timestamp,
        });
        if self.should_block(identifier) {
            warn!(
                identifier = %mask_sensitive(identifier),
                max_attempts = self.config.max_attempts,
                "Login attempt limit reached"
            );
        }
    }

    /// True once `identifier` has made `max_attempts` or more attempts
    /// inside the block window.
    pub fn should_block(&self, identifier: &str) -> bool {
        let cutoff = Utc::now() - Duration::seconds(self.config.block_duration_secs as i64);
        let recent = self
            .attempts
            .iter()
            .filter(|a| a.identifier == identifier && a.timestamp > cutoff)
            .count();
        recent >= self.config.max_attempts as usize
    }

    /// Seconds until the block on `identifier` expires, measured from its
    /// most recent attempt. Zero when there is no attempt on record or the
    /// window has already passed.
    pub fn remaining_block_secs(&self, identifier: &str) -> u64 {
        let newest = self
            .attempts
            .iter()
            .filter(|a| a.identifier == identifier)
            .map(|a| a.timestamp)
            .max();
        match newest {
            Some(timestamp) => {
                let elapsed = (Utc::now() - timestamp).num_seconds().max(0) as u64;
                self.config.block_duration_secs.saturating_sub(elapsed)
            }
            None => 0,
        }
    }

    /// Drop records older than the retention horizon.
    pub fn cleanup(&mut self) {
        let cutoff = Utc::now() - Duration::hours(RETENTION_HOURS);
        self.attempts.retain(|a| a.timestamp > cutoff);
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────
