//! HTTP surface for the civic-complaint platform.
//!
//! Exposed as a library so integration tests can build the exact same
//! router (middleware stack included) that the binary serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod intake;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
