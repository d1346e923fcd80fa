//! HID event value types.
//!
//! Events are immutable values: construct them once via the factory
//! operations in [`crate::event::builders`], then hand them to the
//! dispatcher by reference. Equality is structural, so the same gesture
//! built two different ways compares equal, and re-dispatching a value
//! always replays the same byte sequence.
//!
//! ## Value conventions
//! - **Coordinates:** `f64`, origin top-left. Ranges are not validated here;
//!   the backend clamps to its screen bounds.
//! - **Key codes:** `u32` virtual key codes, passed through untouched.
//! - **Durations:** `std::time::Duration`, so a negative delay is
//!   unrepresentable by construction.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A HID event: a single input primitive, a pause, or an ordered
/// composition of sub-events forming one logical gesture.
///
/// The variant set is closed. Dispatch classifies a value with
/// [`HidEvent::class`] and pattern matching rather than any dynamic
/// capability query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HidEvent {
    /// Finger makes contact at `(x, y)`.
    TouchDown { x: f64, y: f64 },
    /// Finger lifts at `(x, y)`.
    TouchUp { x: f64, y: f64 },
    /// Hardware button pressed.
    ButtonDown { button: HidButton },
    /// Hardware button released.
    ButtonUp { button: HidButton },
    /// Keyboard key pressed.
    KeyDown { key_code: u32 },
    /// Keyboard key released.
    KeyUp { key_code: u32 },
    /// Pause for `duration` before the next sibling. Sends no bytes.
    Delay { duration: Duration },
    /// Ordered sub-events dispatched strictly in sequence. May nest and
    /// may be empty (an empty composite dispatches as an immediate
    /// success).
    Composite { events: Vec<HidEvent> },
}

/// Hardware buttons of the simulated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HidButton {
    ApplePay,
    Home,
    Lock,
    SideButton,
    Siri,
}

impl HidButton {
    /// Stable wire code for this button.
    pub const fn code(self) -> u32 {
        match self {
            HidButton::ApplePay => 1,
            HidButton::Home => 2,
            HidButton::Lock => 3,
            HidButton::SideButton => 4,
            HidButton::Siri => 5,
        }
    }
}

/// Press edge of a payload primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// A payload-capable leaf, classified for encoding.
///
/// Exactly the touch/button/key variants of [`HidEvent`] map here; delays
/// and composites never do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    Touch { direction: Direction, x: f64, y: f64 },
    Button { direction: Direction, button: HidButton },
    Keyboard { direction: Direction, key_code: u32 },
}

impl Payload {
    /// Short kind name for diagnostics ("touch", "button", "keyboard").
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Touch { .. } => "touch",
            Payload::Button { .. } => "button",
            Payload::Keyboard { .. } => "keyboard",
        }
    }
}

/// Dispatch classification of an event node.
///
/// The three classes are disjoint: a leaf is exactly one of payload or
/// delay, and a composite is never itself a leaf.
#[derive(Debug, Clone, Copy)]
pub enum EventClass<'a> {
    /// Encodes to one byte buffer per dispatch attempt.
    Payload(Payload),
    /// Pure pause; never produces bytes.
    Delay(Duration),
    /// Ordered sub-events to recurse into.
    Composite(&'a [HidEvent]),
}

impl HidEvent {
    /// Classify this node for dispatch. Total over the closed variant set.
    pub fn class(&self) -> EventClass<'_> {
        match *self {
            HidEvent::TouchDown { x, y } => EventClass::Payload(Payload::Touch {
                direction: Direction::Down,
                x,
                y,
            }),
            HidEvent::TouchUp { x, y } => EventClass::Payload(Payload::Touch {
                direction: Direction::Up,
                x,
                y,
            }),
            HidEvent::ButtonDown { button } => EventClass::Payload(Payload::Button {
                direction: Direction::Down,
                button,
            }),
            HidEvent::ButtonUp { button } => EventClass::Payload(Payload::Button {
                direction: Direction::Up,
                button,
            }),
            HidEvent::KeyDown { key_code } => EventClass::Payload(Payload::Keyboard {
                direction: Direction::Down,
                key_code,
            }),
            HidEvent::KeyUp { key_code } => EventClass::Payload(Payload::Keyboard {
                direction: Direction::Up,
                key_code,
            }),
            HidEvent::Delay { duration } => EventClass::Delay(duration),
            HidEvent::Composite { ref events } => EventClass::Composite(events),
        }
    }

    /// The payload classification of this node, if it is payload-capable.
    pub fn as_payload(&self) -> Option<Payload> {
        match self.class() {
            EventClass::Payload(payload) => Some(payload),
            _ => None,
        }
    }
}

impl std::fmt::Display for HidEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HidEvent::TouchDown { x, y } => write!(f, "touch-down ({}, {})", x, y),
            HidEvent::TouchUp { x, y } => write!(f, "touch-up ({}, {})", x, y),
            HidEvent::ButtonDown { button } => write!(f, "button-down {}", button),
            HidEvent::ButtonUp { button } => write!(f, "button-up {}", button),
            HidEvent::KeyDown { key_code } => write!(f, "key-down {}", key_code),
            HidEvent::KeyUp { key_code } => write!(f, "key-up {}", key_code),
            HidEvent::Delay { duration } => write!(f, "delay {:?}", duration),
            HidEvent::Composite { events } => write!(f, "composite of {} events", events.len()),
        }
    }
}

impl std::fmt::Display for HidButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HidButton::ApplePay => write!(f, "apple-pay"),
            HidButton::Home => write!(f, "home"),
            HidButton::Lock => write!(f, "lock"),
            HidButton::SideButton => write!(f, "side-button"),
            HidButton::Siri => write!(f, "siri"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = HidEvent::TouchDown { x: 10.0, y: 20.0 };
        let b = HidEvent::TouchDown { x: 10.0, y: 20.0 };
        let c = HidEvent::TouchDown { x: 10.0, y: 21.0 };

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, HidEvent::TouchUp { x: 10.0, y: 20.0 });
    }

    #[test]
    fn test_composite_equality_is_order_sensitive() {
        let down = HidEvent::KeyDown { key_code: 4 };
        let up = HidEvent::KeyUp { key_code: 4 };

        let forward = HidEvent::Composite {
            events: vec![down.clone(), up.clone()],
        };
        let reversed = HidEvent::Composite {
            events: vec![up, down],
        };

        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_clone_is_indistinguishable_from_original() {
        let event = HidEvent::Composite {
            events: vec![
                HidEvent::ButtonDown {
                    button: HidButton::Home,
                },
                HidEvent::Delay {
                    duration: Duration::from_millis(50),
                },
                HidEvent::ButtonUp {
                    button: HidButton::Home,
                },
            ],
        };

        assert_eq!(event.clone(), event);
    }

    #[test]
    fn test_class_is_disjoint() {
        let payload = HidEvent::KeyDown { key_code: 40 };
        let delay = HidEvent::Delay {
            duration: Duration::from_secs(1),
        };
        let composite = HidEvent::Composite { events: vec![] };

        assert!(matches!(payload.class(), EventClass::Payload(_)));
        assert!(matches!(delay.class(), EventClass::Delay(_)));
        assert!(matches!(composite.class(), EventClass::Composite(_)));

        assert!(payload.as_payload().is_some());
        assert!(delay.as_payload().is_none());
        assert!(composite.as_payload().is_none());
    }

    #[test]
    fn test_button_codes_are_distinct() {
        let buttons = [
            HidButton::ApplePay,
            HidButton::Home,
            HidButton::Lock,
            HidButton::SideButton,
            HidButton::Siri,
        ];

        for (i, a) in buttons.iter().enumerate() {
            for b in &buttons[i + 1..] {
                assert_ne!(a.code(), b.code(), "{} and {} share a code", a, b);
            }
        }
    }

    #[test]
    fn test_serializes_as_tagged_camel_case() {
        let event = HidEvent::Composite {
            events: vec![
                HidEvent::KeyDown { key_code: 40 },
                HidEvent::Delay {
                    duration: Duration::from_millis(10),
                },
            ],
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "composite");
        assert_eq!(json["events"][0]["type"], "keyDown");
        assert_eq!(json["events"][0]["keyCode"], 40);
        assert_eq!(json["events"][1]["type"], "delay");
    }

    #[test]
    fn test_display_names_the_variant() {
        let event = HidEvent::TouchDown { x: 1.5, y: 2.0 };
        assert_eq!(event.to_string(), "touch-down (1.5, 2)");

        let press = HidEvent::ButtonDown {
            button: HidButton::SideButton,
        };
        assert_eq!(press.to_string(), "button-down side-button");
    }
}
