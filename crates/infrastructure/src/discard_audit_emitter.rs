//! Do-nothing audit bindings used when session recording is turned off.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use sentra_application::{AuditEmitter, AuditStream};
use sentra_core::{AppError, AppResult, SessionId};
use sentra_domain::{AuditEvent, StreamStatus};

/// Stream that discards every event while honoring the lifecycle contract.
pub struct DiscardAuditStream {
    completed: AtomicBool,
    done: watch::Sender<bool>,
}

impl DiscardAuditStream {
    /// Creates a new open discard stream.
    #[must_use]
    pub fn new() -> Self {
        let (done, _) = watch::channel(false);
        Self {
            completed: AtomicBool::new(false),
            done,
        }
    }
}

impl Default for DiscardAuditStream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditStream for DiscardAuditStream {
    fn setup_event(&self, _event: &AuditEvent) -> AppResult<()> {
        Ok(())
    }

    async fn record_event(&self, cancel: &CancellationToken, event: AuditEvent) -> AppResult<()> {
        ensure_not_cancelled(cancel, "record_event")?;

        if self.completed.load(Ordering::Acquire) {
            return Err(AppError::StreamClosed("stream is closed".to_owned()));
        }

        trace!(
            event_id = %event.id,
            event_type = %event.event_type,
            event_time = %event.time,
            event_index = event.index,
            "discarding stream event"
        );
        Ok(())
    }

    async fn write(&self, data: &[u8]) -> AppResult<usize> {
        if self.completed.load(Ordering::Acquire) {
            return Err(AppError::StreamClosed("stream is closed".to_owned()));
        }

        Ok(data.len())
    }

    fn status(&self) -> Option<watch::Receiver<StreamStatus>> {
        None
    }

    fn done(&self) -> watch::Receiver<bool> {
        self.done.subscribe()
    }

    async fn complete(&self, cancel: &CancellationToken) -> AppResult<()> {
        ensure_not_cancelled(cancel, "complete")?;

        // Single winner fires the latch; a load-then-store here would let two
        // racing callers both observe Open and fire twice.
        if self
            .completed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.done.send_replace(true);
        }

        Ok(())
    }

    async fn close(&self, cancel: &CancellationToken) -> AppResult<()> {
        // No flight data to flush in the discard binding.
        self.complete(cancel).await
    }
}

/// Emitter that discards every event and hands out discard streams.
#[derive(Clone, Default)]
pub struct DiscardAuditEmitter;

impl DiscardAuditEmitter {
    /// Creates a new discard emitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuditEmitter for DiscardAuditEmitter {
    async fn emit_audit_event(
        &self,
        cancel: &CancellationToken,
        event: AuditEvent,
    ) -> AppResult<()> {
        ensure_not_cancelled(cancel, "emit_audit_event")?;

        debug!(
            event_id = %event.id,
            event_type = %event.event_type,
            event_time = %event.time,
            event_index = event.index,
            "discarding event"
        );
        Ok(())
    }

    async fn create_audit_stream(
        &self,
        cancel: &CancellationToken,
        session_id: SessionId,
    ) -> AppResult<Arc<dyn AuditStream>> {
        ensure_not_cancelled(cancel, "create_audit_stream")?;

        trace!(session_id = %session_id, "creating discard audit stream");
        Ok(Arc::new(DiscardAuditStream::new()))
    }

    async fn resume_audit_stream(
        &self,
        cancel: &CancellationToken,
        session_id: SessionId,
        upload_id: &str,
    ) -> AppResult<Arc<dyn AuditStream>> {
        ensure_not_cancelled(cancel, "resume_audit_stream")?;

        trace!(
            session_id = %session_id,
            upload_id = upload_id,
            "resuming discard audit stream"
        );
        Ok(Arc::new(DiscardAuditStream::new()))
    }
}

fn ensure_not_cancelled(cancel: &CancellationToken, operation: &str) -> AppResult<()> {
    if cancel.is_cancelled() {
        return Err(AppError::Cancelled(format!(
            "{operation} aborted by caller"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio_util::sync::CancellationToken;

    use sentra_application::{AuditEmitter, AuditStream};
    use sentra_core::{AppError, AppResult, SessionId};
    use sentra_domain::AuditEvent;

    use super::{DiscardAuditEmitter, DiscardAuditStream};

    fn event() -> AuditEvent {
        AuditEvent::new("session.start").with_id("event-1").with_index(1)
    }

    #[tokio::test]
    async fn open_stream_accepts_events_and_bytes() -> AppResult<()> {
        let stream = DiscardAuditStream::new();
        let cancel = CancellationToken::new();

        stream.setup_event(&event())?;
        stream.record_event(&cancel, event()).await?;
        let written = stream.write(b"chunk").await?;

        assert_eq!(written, 5);
        Ok(())
    }

    #[tokio::test]
    async fn record_after_complete_fails_with_stream_closed() -> AppResult<()> {
        let stream = DiscardAuditStream::new();
        let cancel = CancellationToken::new();

        stream.complete(&cancel).await?;
        let result = stream.record_event(&cancel, event()).await;

        assert!(matches!(result, Err(AppError::StreamClosed(_))));
        Ok(())
    }

    #[tokio::test]
    async fn write_after_complete_fails_with_stream_closed() -> AppResult<()> {
        let stream = DiscardAuditStream::new();
        let cancel = CancellationToken::new();

        stream.complete(&cancel).await?;
        let result = stream.write(b"late bytes").await;

        assert!(matches!(result, Err(AppError::StreamClosed(_))));
        Ok(())
    }

    #[tokio::test]
    async fn status_is_permanently_silent() {
        let stream = DiscardAuditStream::new();
        assert!(stream.status().is_none());
    }

    #[tokio::test]
    async fn done_latch_is_observable_by_multiple_waiters() -> AppResult<()> {
        let stream = Arc::new(DiscardAuditStream::new());
        let cancel = CancellationToken::new();

        let mut first = stream.done();
        let mut second = stream.done();
        assert!(!*first.borrow());

        stream.complete(&cancel).await?;

        assert!(first.wait_for(|completed| *completed).await.is_ok());
        assert!(second.wait_for(|completed| *completed).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn late_subscriber_observes_the_fired_latch_immediately() -> AppResult<()> {
        let stream = DiscardAuditStream::new();
        let cancel = CancellationToken::new();

        stream.complete(&cancel).await?;

        assert!(*stream.done().borrow());
        Ok(())
    }

    #[tokio::test]
    async fn repeated_complete_and_close_do_not_refire_the_latch() -> AppResult<()> {
        let stream = DiscardAuditStream::new();
        let cancel = CancellationToken::new();

        stream.complete(&cancel).await?;
        // Subscribing now marks the fired state as seen; any further send
        // would show up as a change.
        let done = stream.done();

        stream.complete(&cancel).await?;
        stream.close(&cancel).await?;

        assert!(*done.borrow());
        assert!(matches!(done.has_changed(), Ok(false)));
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_completes_all_succeed_and_fire_once() -> AppResult<()> {
        let stream = Arc::new(DiscardAuditStream::new());
        let cancel = CancellationToken::new();
        let mut done = stream.done();

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let stream = stream.clone();
            let cancel = cancel.clone();
            tasks.push(tokio::spawn(
                async move { stream.complete(&cancel).await },
            ));
        }

        for task in tasks {
            let result = task
                .await
                .map_err(|error| AppError::Internal(error.to_string()))?;
            assert!(result.is_ok());
        }

        assert!(done.wait_for(|completed| *completed).await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_records_race_complete_without_panicking() -> AppResult<()> {
        let stream = Arc::new(DiscardAuditStream::new());
        let cancel = CancellationToken::new();

        let mut tasks = Vec::new();
        for index in 0..8 {
            let stream = stream.clone();
            let cancel = cancel.clone();
            tasks.push(tokio::spawn(async move {
                stream
                    .record_event(&cancel, event().with_index(index))
                    .await
            }));
        }
        {
            let stream = stream.clone();
            let cancel = cancel.clone();
            tasks.push(tokio::spawn(
                async move { stream.complete(&cancel).await },
            ));
        }

        for task in tasks {
            let result = task
                .await
                .map_err(|error| AppError::Internal(error.to_string()))?;
            // Records either land before completion or observe the closed
            // stream; both are valid outcomes of the race.
            assert!(matches!(result, Ok(()) | Err(AppError::StreamClosed(_))));
        }
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_token_aborts_operations_with_cancelled() {
        let stream = DiscardAuditStream::new();
        let emitter = DiscardAuditEmitter::new();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let record = stream.record_event(&cancel, event()).await;
        let complete = stream.complete(&cancel).await;
        let emit = emitter.emit_audit_event(&cancel, event()).await;

        assert!(matches!(record, Err(AppError::Cancelled(_))));
        assert!(matches!(complete, Err(AppError::Cancelled(_))));
        assert!(matches!(emit, Err(AppError::Cancelled(_))));
        assert!(!*stream.done().borrow());
    }

    #[tokio::test]
    async fn emitter_hands_out_open_streams() -> AppResult<()> {
        let emitter = DiscardAuditEmitter::new();
        let cancel = CancellationToken::new();
        let session_id = SessionId::new();

        let created = emitter.create_audit_stream(&cancel, session_id).await?;
        let resumed = emitter
            .resume_audit_stream(&cancel, session_id, "upload-1")
            .await?;

        created.record_event(&cancel, event()).await?;
        resumed.record_event(&cancel, event()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn emit_audit_event_succeeds_for_the_discard_binding() -> AppResult<()> {
        let emitter = DiscardAuditEmitter::new();
        let cancel = CancellationToken::new();

        emitter.emit_audit_event(&cancel, event()).await
    }
}
