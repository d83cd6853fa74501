//! Typed access to the headless content service.
//!
//! The visual core never depends on this module; pages consume it and
//! fall back to the static content in [`crate::data`] when the service is
//! unconfigured or unreachable.

mod client;
mod schema;

pub use client::{Client, Error, ListQueries};
pub use schema::{Experience, ExperienceListResponse, ListResponse};
