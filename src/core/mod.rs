//! Core collaborator traits shared across the crate.
//!
//! The timer engine is written against these seams so that wall-clock dates
//! and desktop notifications can be swapped for fakes in tests.

pub mod clock;
pub mod notify;

pub use clock::{Clock, SystemClock};
pub use notify::{DesktopNotifier, Notifier, NullNotifier};
