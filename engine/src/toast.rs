//! Transient commit notices.

use std::time::{Duration, Instant};

use cardfolio_types::Notice;

/// A notice on screen until `expires_at`. Replaced by the next notice, never replayed.
#[derive(Debug, Clone)]
pub struct Toast {
    notice: Notice,
    expires_at: Instant,
}

impl Toast {
    #[must_use]
    pub fn new(notice: Notice, now: Instant, ttl: Duration) -> Self {
        Self {
            notice,
            expires_at: now + ttl,
        }
    }

    #[must_use]
    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.notice.to_string()
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
