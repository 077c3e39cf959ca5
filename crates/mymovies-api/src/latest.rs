//! `LatestRequest` - keeps only the newest of overlapping lookups.
//!
//! Issuing a request supersedes every earlier one. A consumer awaiting a
//! superseded response gets `None` back and must not apply it, so the last
//! request issued wins rather than the last one to resolve. In-flight
//! requests are not aborted.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Shared generation counter for one logical view (e.g. a search box).
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    generation: Arc<AtomicU64>,
}

impl LatestRequest {
    /// Creates a guard with no request issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new token, superseding all earlier ones.
    pub fn issue(&self) -> RequestToken {
        let previous = self.generation.fetch_add(1, Ordering::AcqRel);
        RequestToken(previous.wrapping_add(1))
    }

    /// Returns `true` if no newer token has been issued since `token`.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::Acquire) == token.0
    }

    /// Issues a token, awaits `request`, and returns its output only if the
    /// token is still current.
    pub async fn run<F>(&self, request: F) -> Option<F::Output>
    where
        F: Future,
    {
        let token = self.issue();
        let output = request.await;
        if self.is_current(token) {
            Some(output)
        } else {
            tracing::debug!(token = token.0, "discarding superseded response");
            None
        }
    }
}
