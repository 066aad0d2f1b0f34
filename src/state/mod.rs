//! Key-value state and command application.
//!
//! The container is a plain value with no locking of its own; the store
//! engine decides who may touch it and when.

mod container;
mod operations;

pub use container::StoreState;
pub use operations::{apply_command, evaluate_query};
