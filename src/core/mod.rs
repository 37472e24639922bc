//! Core plumbing shared by every system: error types and the time source.

pub mod clock;
pub mod error;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{ConfigError, LevelError};
