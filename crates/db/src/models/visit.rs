//! Visit slot entity model and DTOs.
//!
//! A visit is a time-bounded, independently bookable resource. The row-level
//! invariant is `available = true` iff `user_id IS NULL`; both fields are
//! only ever written together by the conditional UPDATEs in
//! [`crate::repositories::VisitRepo`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sanctuary_core::types::{DbId, Timestamp};

/// A visit slot row from the `visits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Visit {
    pub id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// The user currently holding the slot, if booked.
    pub user_id: Option<DbId>,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new visit slot.
///
/// No overlap checking is performed against existing slots; duplicate or
/// overlapping time windows are permitted.
#[derive(Debug, Deserialize)]
pub struct CreateVisit {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

/// DTO for rescheduling a visit slot. Only the time window is writable;
/// availability and the assigned user are owned by book/cancel.
#[derive(Debug, Deserialize)]
pub struct UpdateVisit {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}
