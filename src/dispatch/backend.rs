//! Backend boundary for encoded HID commands.
//!
//! The backend is the external consumer of encoded buffers (a simulated
//! device session, a socket to one, ...). This layer only requires that
//! sends issued one at a time, each awaited, are applied in call order.

use crate::encode::EncodeContext;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

/// The backend rejected or failed to deliver a buffer.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("backend rejected buffer: {0}")]
    Rejected(String),

    #[error("backend connection closed")]
    ConnectionClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A consumer of encoded HID command buffers.
///
/// The handle is shared across dispatch calls and treated as a command
/// sink; this layer performs no locking of its own. If the backend needs
/// serialization across concurrent top-level dispatches, that is the
/// backend's contract.
#[async_trait]
pub trait HidBackend: Send + Sync {
    /// Encoding capabilities negotiated for this session.
    fn encode_context(&self) -> EncodeContext;

    /// Deliver one encoded command buffer.
    ///
    /// The dispatcher issues these strictly one at a time and awaits each
    /// acknowledgment before the next.
    async fn send_bytes(&self, buffer: Vec<u8>) -> Result<(), SendError>;
}

/// In-memory backend that records every sent buffer in order.
///
/// Useful for asserting the exact byte sequence a gesture produces without
/// a device session.
pub struct RecordingBackend {
    context: EncodeContext,
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl RecordingBackend {
    pub fn new(context: EncodeContext) -> Self {
        Self {
            context,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of all buffers sent so far, in send order.
    pub fn sent_buffers(&self) -> Vec<Vec<u8>> {
        self.sent.lock().clone()
    }

    /// Number of buffers sent so far.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl HidBackend for RecordingBackend {
    fn encode_context(&self) -> EncodeContext {
        self.context
    }

    async fn send_bytes(&self, buffer: Vec<u8>) -> Result<(), SendError> {
        self.sent.lock().push(buffer);
        Ok(())
    }
}
