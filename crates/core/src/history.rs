//! Constants for the append-only complaint history log.
//!
//! History entries are the only durable record of who changed what, when.
//! They are written once and never updated or deleted.

/// Known action tags for history entries.
pub mod actions {
    /// A complaint was created (new_value = initial status).
    pub const CREATED: &str = "created";
    /// A complaint's status changed (old/new values = statuses).
    pub const STATUS_CHANGED: &str = "status_changed";
    /// A complaint was assigned to a department (old/new values =
    /// department ids).
    pub const ASSIGNED: &str = "assigned";
}
