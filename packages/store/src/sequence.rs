//! Generation counter for re-triggerable fetches.
//!
//! Each fetch takes a [`RequestTicket`] before it starts. When it completes, the
//! ticket is compared against the newest one handed out; anything older is a
//! stale response and must be dropped so it cannot overwrite newer data.

/// Opaque id of one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier ticket.
    pub fn next(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Invalidate all outstanding tickets without starting a request.
    pub fn cancel_all(&mut self) {
        self.latest += 1;
    }
}
