//! Binary payload encoding for HID primitives.
//!
//! Converts one payload-capable event into the opaque byte buffer the
//! backend consumes. Encoding is a pure function of the payload value and
//! the negotiated [`EncodeContext`]: same payload + same context is always
//! byte-identical, and the buffer alone is enough for the backend to tell
//! touch from button from keyboard.
//!
//! All multi-byte fields are little-endian.

use crate::event::{Direction, Payload};
use thiserror::Error;

/// Protocol revision negotiated with the backend at session setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolRevision {
    /// Original command layout: bare tagged body, touch and keyboard only.
    Rev1,
    /// Adds a frame header and hardware-button commands.
    Rev2,
}

impl std::fmt::Display for ProtocolRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolRevision::Rev1 => write!(f, "rev1"),
            ProtocolRevision::Rev2 => write!(f, "rev2"),
        }
    }
}

/// Backend-supplied encoding capabilities. Read-only for this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeContext {
    pub revision: ProtocolRevision,
}

impl EncodeContext {
    pub fn new(revision: ProtocolRevision) -> Self {
        Self { revision }
    }
}

/// The encoder cannot render a payload under the current context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{kind} events are not supported by protocol {revision}")]
    UnsupportedPayload {
        kind: &'static str,
        revision: ProtocolRevision,
    },
}

const KIND_TOUCH: u8 = 0x01;
const KIND_BUTTON: u8 = 0x02;
const KIND_KEYBOARD: u8 = 0x03;

const DIRECTION_UP: u8 = 0x00;
const DIRECTION_DOWN: u8 = 0x01;

/// Frame header magic for [`ProtocolRevision::Rev2`] buffers.
const FRAME_MAGIC: [u8; 2] = [0x48, 0x49];

fn direction_byte(direction: Direction) -> u8 {
    match direction {
        Direction::Down => DIRECTION_DOWN,
        Direction::Up => DIRECTION_UP,
    }
}

/// Encode one payload-capable event into a backend buffer.
///
/// Never blocks and never mutates `context`. Fails only when the payload
/// kind is outside the negotiated revision's capabilities.
pub fn encode(payload: &Payload, context: &EncodeContext) -> Result<Vec<u8>, EncodeError> {
    let body = encode_body(payload, context.revision)?;
    match context.revision {
        ProtocolRevision::Rev1 => Ok(body),
        ProtocolRevision::Rev2 => {
            let mut buffer = Vec::with_capacity(4 + body.len());
            buffer.extend_from_slice(&FRAME_MAGIC);
            buffer.push(0x02);
            buffer.push(body.len() as u8);
            buffer.extend_from_slice(&body);
            Ok(buffer)
        }
    }
}

fn encode_body(payload: &Payload, revision: ProtocolRevision) -> Result<Vec<u8>, EncodeError> {
    match *payload {
        Payload::Touch { direction, x, y } => {
            let mut body = Vec::with_capacity(18);
            body.push(KIND_TOUCH);
            body.push(direction_byte(direction));
            body.extend_from_slice(&x.to_le_bytes());
            body.extend_from_slice(&y.to_le_bytes());
            Ok(body)
        }
        Payload::Button { direction, button } => {
            // Hardware-button commands only exist from rev2 onward.
            if revision == ProtocolRevision::Rev1 {
                return Err(EncodeError::UnsupportedPayload {
                    kind: payload.kind(),
                    revision,
                });
            }
            let mut body = Vec::with_capacity(6);
            body.push(KIND_BUTTON);
            body.push(direction_byte(direction));
            body.extend_from_slice(&button.code().to_le_bytes());
            Ok(body)
        }
        Payload::Keyboard {
            direction,
            key_code,
        } => {
            let mut body = Vec::with_capacity(6);
            body.push(KIND_KEYBOARD);
            body.push(direction_byte(direction));
            body.extend_from_slice(&key_code.to_le_bytes());
            Ok(body)
        }
    }
}
