use sentra_core::{AppError, AppResult};
use sentra_domain::{RegisteredResource, UnifiedResource};

/// Projects storage-backed resource records into the unified web shape.
///
/// The kind tag is an open set, so dispatch keeps an explicit catch-all: an
/// unrecognized kind is surfaced as [`AppError::UnknownKind`], never silently
/// skipped.
pub fn project_unified_resources(
    resources: &[RegisteredResource],
) -> AppResult<Vec<UnifiedResource>> {
    resources.iter().map(project_resource).collect()
}

fn project_resource(resource: &RegisteredResource) -> AppResult<UnifiedResource> {
    match resource.kind.as_str() {
        "node" => Ok(UnifiedResource {
            kind: resource.kind.clone(),
            name: resource
                .hostname
                .clone()
                .unwrap_or_else(|| resource.name.clone()),
            labels: resource.labels.clone(),
            addr: resource.addr.clone(),
            ssh_logins: resource.logins.clone(),
            logins: Vec::new(),
        }),
        "db_server" | "app_server" => Ok(UnifiedResource {
            kind: resource.kind.clone(),
            name: resource.name.clone(),
            labels: resource.labels.clone(),
            addr: None,
            ssh_logins: Vec::new(),
            logins: Vec::new(),
        }),
        "windows_desktop" => Ok(UnifiedResource {
            kind: resource.kind.clone(),
            name: resource.name.clone(),
            labels: resource.labels.clone(),
            addr: resource.addr.clone(),
            ssh_logins: Vec::new(),
            logins: resource.logins.clone(),
        }),
        other => Err(AppError::UnknownKind(format!(
            "resource kind '{other}' has no web projection"
        ))),
    }
}
