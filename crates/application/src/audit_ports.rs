use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use sentra_core::{AppResult, SessionId};
use sentra_domain::{AuditEvent, StreamStatus};

/// Session-scoped audit trail with an explicit completion boundary.
///
/// A stream is shared mutable state: any number of tasks may hold a reference
/// and invoke recording operations concurrently with `complete`/`close`. The
/// completion flag is the only synchronization point; once a caller observes
/// the Completed state, every later recording call must fail with
/// [`sentra_core::AppError::StreamClosed`]. The Open → Completed transition
/// is irreversible and fires the completion latch exactly once, regardless of
/// how many callers race it.
#[async_trait]
pub trait AuditStream: Send + Sync {
    /// Hook invoked before the first recorded event. Never fails in bindings
    /// without an upload pipeline.
    fn setup_event(&self, event: &AuditEvent) -> AppResult<()>;

    /// Records a single event, or fails with `StreamClosed` once completed.
    ///
    /// Returns `Cancelled` promptly when the caller token is already
    /// cancelled, without performing the side effect.
    async fn record_event(&self, cancel: &CancellationToken, event: AuditEvent) -> AppResult<()>;

    /// Records raw bytes under the same closed-stream rule, returning the
    /// number of bytes accepted.
    async fn write(&self, data: &[u8]) -> AppResult<usize>;

    /// Returns the upload status observable, or `None` for bindings with no
    /// asynchronous upload pipeline (the observable never resolves).
    fn status(&self) -> Option<watch::Receiver<StreamStatus>>;

    /// Returns the completion latch.
    ///
    /// The receiver flips to `true` exactly once, at the moment the stream
    /// transitions to Completed, and never changes again. Any number of
    /// waiters may observe it; subscribers arriving after completion see the
    /// fired state immediately.
    fn done(&self) -> watch::Receiver<bool>;

    /// Marks the stream Completed. Idempotent and safe under concurrent
    /// invocation: every call returns success, the latch fires once.
    async fn complete(&self, cancel: &CancellationToken) -> AppResult<()>;

    /// Flushes pending data and closes the stream instance.
    ///
    /// Buffered implementations flush without mutating the recording-complete
    /// marker; bindings with no flight data treat this as `complete`.
    async fn close(&self, cancel: &CancellationToken) -> AppResult<()>;
}

/// Entry point for audit event emission and stream management.
#[async_trait]
pub trait AuditEmitter: Send + Sync {
    /// Emits a single event outside any stream context.
    async fn emit_audit_event(
        &self,
        cancel: &CancellationToken,
        event: AuditEvent,
    ) -> AppResult<()>;

    /// Allocates a new stream bound to the session. Fresh streams start Open.
    async fn create_audit_stream(
        &self,
        cancel: &CancellationToken,
        session_id: SessionId,
    ) -> AppResult<Arc<dyn AuditStream>>;

    /// Reattaches to a previously started, not-yet-completed upload and
    /// returns a stream in Open state positioned to continue recording.
    async fn resume_audit_stream(
        &self,
        cancel: &CancellationToken,
        session_id: SessionId,
        upload_id: &str,
    ) -> AppResult<Arc<dyn AuditStream>>;
}
