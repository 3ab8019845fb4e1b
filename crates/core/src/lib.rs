//! Domain logic for the civic-complaint platform.
//!
//! This crate has no internal dependencies so the priority heuristic,
//! status model, and error taxonomy can be reused by the API layer,
//! repositories, and any future CLI tooling.

pub mod error;
pub mod history;
pub mod priority;
pub mod roles;
pub mod status;
pub mod types;
