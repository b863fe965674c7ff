use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parkade_core::TicketId;

/// Claim check handed out on park and required to unpark.
///
/// Equality is by id only; `issued_at` is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    issued_at: DateTime<Utc>,
}

impl Ticket {
    /// Mint a ticket with a fresh id.
    pub(crate) fn issue() -> Self {
        Self {
            id: TicketId::new(),
            issued_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ticket {}

impl core::hash::Hash for Ticket {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
