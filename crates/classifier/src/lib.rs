//! HTTP client for the external image-classification service.
//!
//! The service is advisory only: intake must proceed whether or not it
//! answers. [`ClassifierClient::classify`] therefore returns a
//! [`Classification`] value, never an error, and maps every failure mode
//! (timeout, connection refused, non-2xx, malformed payload) to
//! [`Classification::Unavailable`].

mod client;

pub use client::{Classification, ClassifierClient, ClassifierError};
