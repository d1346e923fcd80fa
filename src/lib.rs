//! simhid - composable HID events and ordered dispatch for simulated
//! device sessions.
//!
//! Build immutable event values (touches, buttons, keys, delays) and
//! compose them into gestures via the factory operations on
//! [`HidEvent`]; dispatch a tree with [`dispatch`] against any
//! [`HidBackend`], which receives one encoded buffer per payload leaf,
//! strictly in tree order.
//!
//! ```no_run
//! use simhid::{dispatch, EncodeContext, HidEvent, ProtocolRevision, RecordingBackend};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = RecordingBackend::new(EncodeContext::new(ProtocolRevision::Rev2));
//! let gesture = HidEvent::swipe(
//!     10.0,
//!     400.0,
//!     10.0,
//!     80.0,
//!     simhid::DEFAULT_SWIPE_DELTA,
//!     Duration::from_millis(500),
//! )?;
//! dispatch(&gesture, &backend).await?;
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod encode;
pub mod event;

pub use dispatch::{
    dispatch, dispatch_with_cancel, DispatchError, EventPath, HidBackend, RecordingBackend,
    SendError,
};
pub use encode::{encode, EncodeContext, EncodeError, ProtocolRevision};
pub use event::{
    ConstructionError, Direction, EventClass, HidButton, HidEvent, Payload, DEFAULT_SWIPE_DELTA,
};
