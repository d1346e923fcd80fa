//! Dispatching event trees to a backend
//!
//! The backend seam ([`HidBackend`]) and the ordered, fail-fast traversal
//! that drives it.

pub mod backend;
pub mod dispatcher;

pub use backend::{HidBackend, RecordingBackend, SendError};
pub use dispatcher::{dispatch, dispatch_with_cancel, DispatchError, EventPath};
