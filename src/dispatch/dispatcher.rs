//! Ordered, fail-fast dispatch of event trees.
//!
//! A dispatch walks the tree depth-first, left to right, as one strictly
//! sequential pipeline: every payload send is awaited before the next
//! sibling starts and every delay is a real suspension of the chain. HID
//! ordering (touch-down before touch-up, key-down before key-up) is part
//! of the correctness contract, so sub-events are never issued
//! concurrently.

use crate::dispatch::backend::{HidBackend, SendError};
use crate::encode::{encode, EncodeContext, EncodeError};
use crate::event::{EventClass, HidEvent};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Index path of a node within a dispatch tree, e.g. `2.0.1`.
///
/// The top-level event is `root`; each segment is the child index inside
/// the enclosing composite.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventPath(Vec<usize>);

impl EventPath {
    fn root() -> Self {
        Self(Vec::new())
    }

    fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Child indices from the root down to the node.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl std::fmt::Display for EventPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "root");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

/// A dispatch failed or was cancelled. Carries the path of the offending
/// leaf; nothing past that point was attempted.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to encode event at {path}: {source}")]
    Encode {
        path: EventPath,
        #[source]
        source: EncodeError,
    },

    #[error("failed to send event at {path}: {source}")]
    Send {
        path: EventPath,
        #[source]
        source: SendError,
    },

    #[error("dispatch cancelled before event at {path}")]
    Cancelled { path: EventPath },
}

impl DispatchError {
    /// Path of the node the dispatch stopped at.
    pub fn path(&self) -> &EventPath {
        match self {
            DispatchError::Encode { path, .. }
            | DispatchError::Send { path, .. }
            | DispatchError::Cancelled { path } => path,
        }
    }
}

/// Dispatch an event tree against the backend.
///
/// Resolves only after every leaf has completed in order; fails on the
/// first failing leaf with the rest never attempted. Dropping the returned
/// future stops the traversal before the next untried leaf; a leaf already
/// in flight follows the backend's own cancellation contract.
pub async fn dispatch(event: &HidEvent, backend: &dyn HidBackend) -> Result<(), DispatchError> {
    dispatch_inner(event, backend, None).await
}

/// Like [`dispatch`], with a cooperative cancel flag.
///
/// The flag is checked before every node; once set, the dispatch resolves
/// with [`DispatchError::Cancelled`] naming the first unattempted node.
pub async fn dispatch_with_cancel(
    event: &HidEvent,
    backend: &dyn HidBackend,
    cancel: &AtomicBool,
) -> Result<(), DispatchError> {
    dispatch_inner(event, backend, Some(cancel)).await
}

async fn dispatch_inner(
    event: &HidEvent,
    backend: &dyn HidBackend,
    cancel: Option<&AtomicBool>,
) -> Result<(), DispatchError> {
    let context = backend.encode_context();
    tracing::debug!(%event, ?context, "dispatching event tree");

    let result = dispatch_node(event, backend, &context, cancel, EventPath::root()).await;
    match &result {
        Ok(()) => tracing::debug!(%event, "event tree dispatched"),
        Err(error) => tracing::debug!(%error, "event tree dispatch aborted"),
    }
    result
}

type DispatchFuture<'a> = Pin<Box<dyn Future<Output = Result<(), DispatchError>> + Send + 'a>>;

fn dispatch_node<'a>(
    event: &'a HidEvent,
    backend: &'a dyn HidBackend,
    context: &'a EncodeContext,
    cancel: Option<&'a AtomicBool>,
    path: EventPath,
) -> DispatchFuture<'a> {
    Box::pin(async move {
        if let Some(flag) = cancel {
            if flag.load(Ordering::SeqCst) {
                return Err(DispatchError::Cancelled { path });
            }
        }

        match event.class() {
            EventClass::Delay(duration) => {
                tracing::trace!(%path, ?duration, "delay");
                tokio::time::sleep(duration).await;
                Ok(())
            }
            EventClass::Payload(payload) => {
                let buffer = encode(&payload, context).map_err(|source| DispatchError::Encode {
                    path: path.clone(),
                    source,
                })?;
                tracing::trace!(%path, kind = payload.kind(), len = buffer.len(), "send");
                backend
                    .send_bytes(buffer)
                    .await
                    .map_err(|source| DispatchError::Send { path, source })
            }
            EventClass::Composite(events) => {
                for (index, child) in events.iter().enumerate() {
                    dispatch_node(child, backend, context, cancel, path.child(index)).await?;
                }
                Ok(())
            }
        }
    })
}
