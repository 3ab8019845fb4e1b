//! Profile role constants.
//!
//! Roles are stored as TEXT in the `profiles` table. Citizens only see
//! their own complaints; admins see and triage everything.

pub const ROLE_CITIZEN: &str = "citizen";
pub const ROLE_ADMIN: &str = "admin";

/// All valid roles.
pub const VALID_ROLES: &[&str] = &[ROLE_CITIZEN, ROLE_ADMIN];
