//! Platform services consumed by the terminal core.
//!
//! The only environment the terminal reads is the wall clock and the IANA
//! timezone name (for `date`). Both sit behind [`TimeService`] so tests can
//! pin them.

mod services;

pub use services::{DesktopPlatform, FixedClock, LocalTime, TimeService};
