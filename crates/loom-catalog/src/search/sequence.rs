//! Last-writer-wins ordering for queries that finish out of order.
//!
//! Every query is tagged with a ticket when it is issued. A finished result
//! is only published if its ticket is newer than the last published one, so
//! a superseded query can never overwrite a more recent result.

/// Sequence number of an issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Issues tickets and keeps the most recent accepted result.
#[derive(Debug)]
pub struct QuerySequencer<T> {
    issued: u64,
    accepted: Option<QueryTicket>,
    latest: Option<T>,
}

impl<T> Default for QuerySequencer<T> {
    fn default() -> Self {
        Self {
            issued: 0,
            accepted: None,
            latest: None,
        }
    }
}

impl<T> QuerySequencer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new query.
    pub fn issue(&mut self) -> QueryTicket {
        self.issued += 1;
        QueryTicket(self.issued)
    }

    /// Publish a finished result. Returns `false` and drops the result if a
    /// newer ticket was already published.
    pub fn accept(&mut self, ticket: QueryTicket, result: T) -> bool {
        if self.accepted.is_some_and(|accepted| ticket <= accepted) {
            tracing::debug!(
                ticket = ticket.sequence(),
                "discarding superseded query result"
            );
            return false;
        }
        self.accepted = Some(ticket);
        self.latest = Some(result);
        true
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.issued
    }

    /// The most recent accepted result.
    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }

    pub fn latest_ticket(&self) -> Option<QueryTicket> {
        self.accepted
    }
}
