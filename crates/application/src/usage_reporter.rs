use std::sync::Arc;

use async_trait::async_trait;

use sentra_core::AppResult;
use sentra_domain::{SubmitEvent, UsageEvent, UserMetadata};

use crate::anonymizer::Anonymizer;
use crate::role_diff::emit_editor_change_event;
use crate::usage_converter::convert_usage_event;

/// Submission port for anonymized outbound events.
///
/// Accepts zero or more events per call; the converter and diff analyzer
/// never submit directly, they hand constructed events to this collaborator.
#[async_trait]
pub trait UsageEventSubmitter: Send + Sync {
    /// Submits a batch of anonymized events for delivery.
    async fn submit_events(&self, events: Vec<SubmitEvent>) -> AppResult<()>;
}

/// Application service turning internal telemetry into anonymized submissions.
#[derive(Clone)]
pub struct UsageReporter {
    anonymizer: Arc<dyn Anonymizer>,
    submitter: Arc<dyn UsageEventSubmitter>,
}

impl UsageReporter {
    /// Creates a new reporter from required dependencies.
    #[must_use]
    pub fn new(anonymizer: Arc<dyn Anonymizer>, submitter: Arc<dyn UsageEventSubmitter>) -> Self {
        Self {
            anonymizer,
            submitter,
        }
    }

    /// Converts one usage event and submits it.
    ///
    /// Validation failures propagate to the caller and nothing is submitted.
    pub async fn report_usage_event(
        &self,
        event: UsageEvent,
        user: &UserMetadata,
    ) -> AppResult<()> {
        let converted = convert_usage_event(self.anonymizer.as_ref(), event, user)?;
        self.submitter.submit_events(vec![converted]).await
    }

    /// Reports an editor-role transition between two role assignments.
    ///
    /// Submits exactly one anonymized change event when editor membership
    /// changed, and nothing otherwise.
    pub async fn report_editor_change(
        &self,
        username: &str,
        prev_roles: &[String],
        new_roles: &[String],
    ) -> AppResult<()> {
        let mut events = Vec::new();
        emit_editor_change_event(username, prev_roles, new_roles, |change| {
            events.push(SubmitEvent::EditorChange {
                user_name: self.anonymizer.anonymize_string(change.user_name()),
                status: change.status(),
            });
        });

        if events.is_empty() {
            return Ok(());
        }

        self.submitter.submit_events(events).await
    }
}
