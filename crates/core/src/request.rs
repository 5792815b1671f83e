//! Ordering of overlapping requests from one view

use std::cell::Cell;

/// Issued when a request starts; compared against the sequence when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Lets only the most recently started request publish its result.
///
/// A view that refetches when its inputs change takes a ticket per fetch and drops
/// any response whose ticket is no longer current.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket
    pub fn start(&self) -> RequestTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}
