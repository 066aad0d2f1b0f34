//! Command log implementation.
//!
//! Committed commands are kept in an append-only, in-memory log that
//! serves replay and auditing, never reads.

mod log;

pub use log::CommandLog;
