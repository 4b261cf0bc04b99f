//! System information module - process enumeration and liveness
//!
//! This module hides the operating system behind the [`ProcessSource`]
//! trait so the views only ever see [`ProcessRecord`] snapshots.

pub mod error;
pub mod processes;

#[cfg(test)]
pub mod mock;

pub use processes::{snapshot, ProcessRecord, ProcessSource, SysinfoSource};
