use serde::{Deserialize, Serialize};

use crate::usage::{DiscoverResourceMetadata, DiscoverStepStatus, IntegrationEnrollKind};

/// Discover correlation metadata with identity replaced by a pseudonym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitDiscoverMetadata {
    /// Identifier correlating all events of one discover session.
    pub id: String,
    /// Anonymized token standing in for the acting user.
    pub user_name: String,
    /// Whether the user authenticated through an SSO provider.
    pub sso: bool,
}

/// Enrollment correlation metadata with identity replaced by a pseudonym.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitIntegrationEnrollMetadata {
    /// Identifier correlating all events of one enrollment.
    pub id: String,
    /// Anonymized token standing in for the acting user.
    pub user_name: String,
    /// Kind of integration being enrolled.
    pub kind: IntegrationEnrollKind,
}

/// Direction of a privileged editor-role transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorChangeStatus {
    /// The editor role was granted to the user.
    Granted,
    /// The editor role was removed from the user.
    Removed,
}

/// Outbound anonymized telemetry event.
///
/// Structurally mirrors [`crate::UsageEvent`]; identity fields are replaced
/// by anonymized tokens, every other field is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmitEvent {
    /// User started the discover flow.
    DiscoverStarted {
        /// Anonymized discover correlation metadata.
        metadata: SubmitDiscoverMetadata,
        /// Outcome of the step.
        status: DiscoverStepStatus,
    },
    /// User selected a resource kind in the discover flow.
    DiscoverResourceSelection {
        /// Anonymized discover correlation metadata.
        metadata: SubmitDiscoverMetadata,
        /// Selected resource kind.
        resource: DiscoverResourceMetadata,
        /// Outcome of the step.
        status: DiscoverStepStatus,
    },
    /// Automatic discovery reported the resources it found.
    DiscoverAutoDiscoveredResources {
        /// Anonymized discover correlation metadata.
        metadata: SubmitDiscoverMetadata,
        /// Resource kind the discovery ran for.
        resource: DiscoverResourceMetadata,
        /// Outcome of the step.
        status: DiscoverStepStatus,
        /// Number of resources discovered.
        resources_count: i64,
    },
    /// User started enrolling an integration.
    IntegrationEnrollStart {
        /// Anonymized enrollment correlation metadata.
        metadata: SubmitIntegrationEnrollMetadata,
    },
    /// User finished enrolling an integration.
    IntegrationEnrollComplete {
        /// Anonymized enrollment correlation metadata.
        metadata: SubmitIntegrationEnrollMetadata,
    },
    /// The privileged editor role was granted to or removed from a user.
    EditorChange {
        /// Anonymized token standing in for the affected user.
        user_name: String,
        /// Direction of the transition.
        status: EditorChangeStatus,
    },
}

impl SubmitEvent {
    /// Returns the stable event type value.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DiscoverStarted { .. } => "discover_started",
            Self::DiscoverResourceSelection { .. } => "discover_resource_selection",
            Self::DiscoverAutoDiscoveredResources { .. } => "discover_auto_discovered_resources",
            Self::IntegrationEnrollStart { .. } => "integration_enroll_start",
            Self::IntegrationEnrollComplete { .. } => "integration_enroll_complete",
            Self::EditorChange { .. } => "editor_change",
        }
    }
}
