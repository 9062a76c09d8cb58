//! Domain schema types and invariants for audit and usage telemetry.

#![forbid(unsafe_code)]

mod audit;
mod resource;
mod submit;
mod usage;

pub use audit::{AuditEvent, StreamStatus};
pub use resource::{Label, RegisteredResource, UnifiedResource};
pub use submit::{
    EditorChangeStatus, SubmitDiscoverMetadata, SubmitEvent, SubmitIntegrationEnrollMetadata,
};
pub use usage::{
    DiscoverMetadata, DiscoverResource, DiscoverResourceMetadata, DiscoverStatus,
    DiscoverStepStatus, IntegrationEnrollKind, IntegrationEnrollMetadata, UsageEvent, UserMetadata,
};
