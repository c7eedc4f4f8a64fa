//! Foundation types for KODE_OS.
//!
//! Platform-agnostic types shared by every KODE_OS crate: input events,
//! terminal configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
