//! Factory operations for HID events.
//!
//! These are the only intended construction surface: each builder validates
//! its inputs synchronously and either returns a well-formed [`HidEvent`]
//! or a [`ConstructionError`]. A malformed value never reaches the
//! dispatcher. Builders are pure and never consult the backend.

use crate::event::types::{HidButton, HidEvent};
use std::time::Duration;
use thiserror::Error;

/// Default spacing, in points, between interpolated swipe touches.
///
/// Callers that have no opinion about sampling density pass this to
/// [`HidEvent::swipe`].
pub const DEFAULT_SWIPE_DELTA: f64 = 10.0;

/// Errors raised at event construction time.
///
/// Construction errors are local to the one builder call that raised them;
/// nothing is deferred to dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("coordinate is not finite: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("swipe delta must be finite and positive, got {0}")]
    InvalidSwipeDelta(f64),
}

fn check_point(x: f64, y: f64) -> Result<(), ConstructionError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(ConstructionError::NonFiniteCoordinate { x, y })
    }
}

impl HidEvent {
    /// A touch making contact at `(x, y)`.
    pub fn touch_down(x: f64, y: f64) -> Result<HidEvent, ConstructionError> {
        check_point(x, y)?;
        Ok(HidEvent::TouchDown { x, y })
    }

    /// A touch lifting at `(x, y)`.
    pub fn touch_up(x: f64, y: f64) -> Result<HidEvent, ConstructionError> {
        check_point(x, y)?;
        Ok(HidEvent::TouchUp { x, y })
    }

    /// A hardware button press edge.
    pub fn button_down(button: HidButton) -> HidEvent {
        HidEvent::ButtonDown { button }
    }

    /// A hardware button release edge.
    pub fn button_up(button: HidButton) -> HidEvent {
        HidEvent::ButtonUp { button }
    }

    /// A keyboard key press edge.
    pub fn key_down(key_code: u32) -> HidEvent {
        HidEvent::KeyDown { key_code }
    }

    /// A keyboard key release edge.
    pub fn key_up(key_code: u32) -> HidEvent {
        HidEvent::KeyUp { key_code }
    }

    /// A standalone pause. Dispatch sleeps for `duration` and sends nothing.
    pub fn delay(duration: Duration) -> HidEvent {
        HidEvent::Delay { duration }
    }

    /// A touch-down followed by an immediate touch-up at `(x, y)`.
    pub fn tap(x: f64, y: f64) -> Result<HidEvent, ConstructionError> {
        check_point(x, y)?;
        Ok(HidEvent::Composite {
            events: vec![HidEvent::TouchDown { x, y }, HidEvent::TouchUp { x, y }],
        })
    }

    /// A touch-down held for `duration`, then a touch-up at `(x, y)`.
    pub fn tap_with_duration(
        x: f64,
        y: f64,
        duration: Duration,
    ) -> Result<HidEvent, ConstructionError> {
        check_point(x, y)?;
        Ok(HidEvent::Composite {
            events: vec![
                HidEvent::TouchDown { x, y },
                HidEvent::Delay { duration },
                HidEvent::TouchUp { x, y },
            ],
        })
    }

    /// A button press edge followed by an immediate release edge.
    pub fn short_button_press(button: HidButton) -> HidEvent {
        HidEvent::Composite {
            events: vec![
                HidEvent::ButtonDown { button },
                HidEvent::ButtonUp { button },
            ],
        }
    }

    /// A key press edge followed by an immediate release edge.
    pub fn short_key_press(key_code: u32) -> HidEvent {
        HidEvent::Composite {
            events: vec![
                HidEvent::KeyDown { key_code },
                HidEvent::KeyUp { key_code },
            ],
        }
    }

    /// One short key press per code, in input order. An empty input yields
    /// an empty composite, which dispatches as an immediate success.
    pub fn short_key_press_sequence(key_codes: &[u32]) -> HidEvent {
        let mut events = Vec::with_capacity(key_codes.len() * 2);
        for &key_code in key_codes {
            events.push(HidEvent::KeyDown { key_code });
            events.push(HidEvent::KeyUp { key_code });
        }
        HidEvent::Composite { events }
    }

    /// A straight-line swipe from `(x_start, y_start)` to `(x_end, y_end)`.
    ///
    /// The gesture is a series of touch-down events along the line: after
    /// the initial touch-down at the start point, `n` interpolated points
    /// (evenly spaced by arc length, excluding the start, including the
    /// end) are each re-fired as a touch-down followed by a delay of
    /// `duration / n`, concluding with a touch-up at the end point. There
    /// is no touch-move primitive in this model.
    ///
    /// `delta` is the spacing between interpolated points:
    /// `n = max(1, round(distance / delta))`. Sampling density is
    /// controlled by `delta`, total gesture time by `duration`, regardless
    /// of point count.
    ///
    /// A zero-length swipe (start == end) degrades to
    /// [`HidEvent::tap_with_duration`] at the start point.
    pub fn swipe(
        x_start: f64,
        y_start: f64,
        x_end: f64,
        y_end: f64,
        delta: f64,
        duration: Duration,
    ) -> Result<HidEvent, ConstructionError> {
        check_point(x_start, y_start)?;
        check_point(x_end, y_end)?;
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ConstructionError::InvalidSwipeDelta(delta));
        }
        if x_start == x_end && y_start == y_end {
            return HidEvent::tap_with_duration(x_start, y_start, duration);
        }

        let dx = x_end - x_start;
        let dy = y_end - y_start;
        let distance = dx.hypot(dy);
        let steps = ((distance / delta).round() as u32).max(1);
        let step_delay = duration / steps;

        let mut events = Vec::with_capacity(2 * steps as usize + 2);
        events.push(HidEvent::TouchDown {
            x: x_start,
            y: y_start,
        });
        for step in 1..=steps {
            let t = f64::from(step) / f64::from(steps);
            events.push(HidEvent::TouchDown {
                x: x_start + dx * t,
                y: y_start + dy * t,
            });
            events.push(HidEvent::Delay {
                duration: step_delay,
            });
        }
        events.push(HidEvent::TouchUp { x: x_end, y: y_end });

        Ok(HidEvent::Composite { events })
    }

    /// Wraps an arbitrary ordered sequence of events into one composite,
    /// enabling arbitrary nesting.
    pub fn with_events(events: Vec<HidEvent>) -> HidEvent {
        HidEvent::Composite { events }
    }
}
