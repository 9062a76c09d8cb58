use serde::{Deserialize, Serialize};

/// Identity of the user an internal usage event is attributed to.
///
/// Carried next to events inside the process only; the outbound schema never
/// contains these fields in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Login name of the user.
    pub username: String,
    /// Whether the user authenticated through an SSO provider.
    pub is_sso: bool,
}

/// Correlation metadata shared by every discover flow event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverMetadata {
    /// Identifier correlating all events of one discover session.
    pub id: String,
}

/// Resource kinds selectable in the discover flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoverResource {
    /// Sentinel for an unset resource kind.
    Unspecified,
    /// SSH server resource.
    Server,
    /// Kubernetes cluster resource.
    Kubernetes,
    /// Database resource.
    Database,
    /// Windows desktop resource.
    WindowsDesktop,
    /// Web application resource.
    Application,
}

impl DiscoverResource {
    /// Returns a stable storage value for this resource kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Server => "server",
            Self::Kubernetes => "kubernetes",
            Self::Database => "database",
            Self::WindowsDesktop => "windows_desktop",
            Self::Application => "application",
        }
    }
}

/// Resource selection payload for discover flow events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverResourceMetadata {
    /// Selected resource kind.
    pub resource: DiscoverResource,
}

/// Outcome of one discover flow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoverStatus {
    /// Sentinel for an unset step outcome.
    Unspecified,
    /// Step finished successfully.
    Success,
    /// Step was skipped by the user.
    Skipped,
    /// Step failed; an error message accompanies the status.
    Error,
    /// Flow was aborted at this step.
    Aborted,
}

/// Step outcome with its optional error detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverStepStatus {
    /// Outcome of the step.
    pub status: DiscoverStatus,
    /// Error detail, mandatory when the outcome is [`DiscoverStatus::Error`].
    pub error: Option<String>,
}

/// Integration kinds enrollable from the web UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationEnrollKind {
    /// Sentinel for an unset integration kind.
    Unspecified,
    /// AWS OIDC integration.
    AwsOidc,
    /// Slack integration.
    Slack,
    /// Machine identity integration.
    MachineId,
}

impl IntegrationEnrollKind {
    /// Returns a stable storage value for this integration kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::AwsOidc => "aws_oidc",
            Self::Slack => "slack",
            Self::MachineId => "machine_id",
        }
    }
}

/// Correlation metadata shared by integration enrollment events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationEnrollMetadata {
    /// Identifier correlating all events of one enrollment.
    pub id: String,
    /// Kind of integration being enrolled.
    pub kind: IntegrationEnrollKind,
}

/// Internal product-telemetry event, pre-anonymization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UsageEvent {
    /// User started the discover flow.
    DiscoverStarted {
        /// Discover session correlation metadata.
        metadata: DiscoverMetadata,
        /// Outcome of the step.
        status: DiscoverStepStatus,
    },
    /// User selected a resource kind in the discover flow.
    DiscoverResourceSelection {
        /// Discover session correlation metadata.
        metadata: DiscoverMetadata,
        /// Selected resource kind.
        resource: DiscoverResourceMetadata,
        /// Outcome of the step.
        status: DiscoverStepStatus,
    },
    /// Automatic discovery reported the resources it found.
    DiscoverAutoDiscoveredResources {
        /// Discover session correlation metadata.
        metadata: DiscoverMetadata,
        /// Resource kind the discovery ran for.
        resource: DiscoverResourceMetadata,
        /// Outcome of the step.
        status: DiscoverStepStatus,
        /// Number of resources discovered; never negative.
        resources_count: i64,
    },
    /// User started enrolling an integration.
    IntegrationEnrollStart {
        /// Enrollment correlation metadata.
        metadata: IntegrationEnrollMetadata,
    },
    /// User finished enrolling an integration.
    IntegrationEnrollComplete {
        /// Enrollment correlation metadata.
        metadata: IntegrationEnrollMetadata,
    },
}

impl UsageEvent {
    /// Returns the stable event type value.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DiscoverStarted { .. } => "discover_started",
            Self::DiscoverResourceSelection { .. } => "discover_resource_selection",
            Self::DiscoverAutoDiscoveredResources { .. } => "discover_auto_discovered_resources",
            Self::IntegrationEnrollStart { .. } => "integration_enroll_start",
            Self::IntegrationEnrollComplete { .. } => "integration_enroll_complete",
        }
    }
}
