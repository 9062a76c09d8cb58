//! Application ports and use-cases for audit recording and usage telemetry.

#![forbid(unsafe_code)]

mod anonymizer;
mod audit_ports;
mod plugins_config;
mod resource_projection;
mod role_diff;
mod usage_converter;
mod usage_reporter;

pub use anonymizer::Anonymizer;
pub use audit_ports::{AuditEmitter, AuditStream};
pub use plugins_config::PluginsConfig;
pub use resource_projection::project_unified_resources;
pub use role_diff::{
    EDITOR_ROLE_NAME, EditorChangeEvent, editor_change_status, emit_editor_change_event,
};
pub use usage_converter::convert_usage_event;
pub use usage_reporter::{UsageEventSubmitter, UsageReporter};
