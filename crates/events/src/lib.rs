//! Domain event abstractions.
//!
//! Mechanics only: no storage, no transport, no replay. Events here are
//! transient instructions handed to a dispatcher, not an append-only log.

pub mod envelope;
pub mod event;

pub use envelope::{EventEnvelope, RawEnvelope};
pub use event::Event;
