//! HID event value model and factory operations
//!
//! Defines the closed set of event variants and the builders that compose
//! primitives into gestures (taps, swipes, key sequences).

pub mod builders;
pub mod types;

pub use builders::{ConstructionError, DEFAULT_SWIPE_DELTA};
pub use types::{Direction, EventClass, HidButton, HidEvent, Payload};
