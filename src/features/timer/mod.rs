//! The countdown state machine.
//!
//! Cycles between focus and break phases:
//! - A focus phase counts down, accumulates focus time, and on completion
//!   prompts for the next break (long every N cycles, short otherwise).
//! - A break phase counts down and on completion prompts for a new focus
//!   session.
//! The engine never advances phases on its own; it waits at the prompt.

pub mod countdown;
pub mod engine;
pub mod phase;
pub mod ticker;

pub use countdown::{format_duration, format_duration_mmss, Countdown};
pub use engine::{Tick, TimerEngine};
pub use phase::Phase;
pub use ticker::{TickHandle, Ticker};
