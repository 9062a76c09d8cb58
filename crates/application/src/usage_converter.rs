use sentra_core::{AppError, AppResult};
use sentra_domain::{
    DiscoverMetadata, DiscoverResource, DiscoverResourceMetadata, DiscoverStatus,
    DiscoverStepStatus, IntegrationEnrollKind, IntegrationEnrollMetadata, SubmitDiscoverMetadata,
    SubmitEvent, SubmitIntegrationEnrollMetadata, UsageEvent, UserMetadata,
};

use crate::anonymizer::Anonymizer;

/// Converts an internal usage event into its anonymized outbound form.
///
/// Conversion is all-or-nothing: every field invariant is checked before the
/// subject identity is anonymized and the outbound variant is constructed.
/// On any failure a [`AppError::Validation`] is returned and no partial
/// output exists.
pub fn convert_usage_event(
    anonymizer: &dyn Anonymizer,
    event: UsageEvent,
    user: &UserMetadata,
) -> AppResult<SubmitEvent> {
    match event {
        UsageEvent::DiscoverStarted { metadata, status } => {
            require_discover_id(&metadata)?;
            let status = require_step_error_message(status)?;

            Ok(SubmitEvent::DiscoverStarted {
                metadata: anonymize_discover_metadata(anonymizer, metadata, user),
                status,
            })
        }
        UsageEvent::DiscoverResourceSelection {
            metadata,
            resource,
            status,
        } => {
            require_discover_id(&metadata)?;
            let resource = require_known_resource(resource)?;
            let status = require_step_error_message(status)?;

            Ok(SubmitEvent::DiscoverResourceSelection {
                metadata: anonymize_discover_metadata(anonymizer, metadata, user),
                resource,
                status,
            })
        }
        UsageEvent::DiscoverAutoDiscoveredResources {
            metadata,
            resource,
            status,
            resources_count,
        } => {
            require_discover_id(&metadata)?;
            let resource = require_known_resource(resource)?;
            let status = require_step_error_message(status)?;
            if resources_count < 0 {
                return Err(AppError::Validation(format!(
                    "resources count must not be negative, got {resources_count}"
                )));
            }

            Ok(SubmitEvent::DiscoverAutoDiscoveredResources {
                metadata: anonymize_discover_metadata(anonymizer, metadata, user),
                resource,
                status,
                resources_count,
            })
        }
        UsageEvent::IntegrationEnrollStart { metadata } => {
            require_enroll_metadata(&metadata)?;

            Ok(SubmitEvent::IntegrationEnrollStart {
                metadata: anonymize_enroll_metadata(anonymizer, metadata, user),
            })
        }
        UsageEvent::IntegrationEnrollComplete { metadata } => {
            require_enroll_metadata(&metadata)?;

            Ok(SubmitEvent::IntegrationEnrollComplete {
                metadata: anonymize_enroll_metadata(anonymizer, metadata, user),
            })
        }
    }
}

fn require_discover_id(metadata: &DiscoverMetadata) -> AppResult<()> {
    if metadata.id.is_empty() {
        return Err(AppError::Validation(
            "discover metadata is missing its id".to_owned(),
        ));
    }

    Ok(())
}

fn require_known_resource(resource: DiscoverResourceMetadata) -> AppResult<DiscoverResourceMetadata> {
    if resource.resource == DiscoverResource::Unspecified {
        return Err(AppError::Validation(
            "discover resource is unspecified".to_owned(),
        ));
    }

    Ok(resource)
}

fn require_step_error_message(status: DiscoverStepStatus) -> AppResult<DiscoverStepStatus> {
    if status.status == DiscoverStatus::Error
        && status.error.as_deref().is_none_or(str::is_empty)
    {
        return Err(AppError::Validation(
            "error step status is missing its error message".to_owned(),
        ));
    }

    Ok(status)
}

fn require_enroll_metadata(metadata: &IntegrationEnrollMetadata) -> AppResult<()> {
    if metadata.id.is_empty() {
        return Err(AppError::Validation(
            "integration enroll metadata is missing its id".to_owned(),
        ));
    }

    if metadata.kind == IntegrationEnrollKind::Unspecified {
        return Err(AppError::Validation(
            "integration enroll kind is unspecified".to_owned(),
        ));
    }

    Ok(())
}

fn anonymize_discover_metadata(
    anonymizer: &dyn Anonymizer,
    metadata: DiscoverMetadata,
    user: &UserMetadata,
) -> SubmitDiscoverMetadata {
    SubmitDiscoverMetadata {
        id: metadata.id,
        user_name: anonymizer.anonymize_string(&user.username),
        sso: user.is_sso,
    }
}

fn anonymize_enroll_metadata(
    anonymizer: &dyn Anonymizer,
    metadata: IntegrationEnrollMetadata,
    user: &UserMetadata,
) -> SubmitIntegrationEnrollMetadata {
    SubmitIntegrationEnrollMetadata {
        id: metadata.id,
        user_name: anonymizer.anonymize_string(&user.username),
        kind: metadata.kind,
    }
}
