//! Platform service abstractions for KODE_OS.
//!
//! The terminal only needs a wall clock (`date`, `git log`); it reaches it
//! through the [`TimeService`] trait so tests can pin the time.

mod services;

pub use services::{DesktopPlatform, SystemTime, TimeService};
