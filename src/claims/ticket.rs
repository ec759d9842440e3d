//! Request staleness tokens.
//!
//! Every analysis started through [`RequestSequencer::issue`] gets a
//! monotonically increasing ticket. Only the most recently issued ticket is
//! current; a response that arrives for an older ticket is stale and must not
//! be acted upon.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    sequence: u64,
    issued_at: DateTime<Utc>,
}

impl RequestTicket {
    /// Position in issue order, starting at 1.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// When the ticket was issued.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Milliseconds since the ticket was issued.
    #[must_use]
    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.issued_at).num_milliseconds()
    }
}

/// Issues tickets and answers whether a ticket is still the latest.
///
/// Cloning shares the counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    /// Create a sequencer with no tickets issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding all earlier ones.
    pub fn issue(&self) -> RequestTicket {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            sequence,
            issued_at: Utc::now(),
        }
    }

    /// True when no ticket has been issued after `ticket`.
    #[must_use]
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.sequence
    }

    /// Sequence of the most recently issued ticket, 0 before the first.
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}
