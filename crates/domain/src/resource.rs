use serde::{Deserialize, Serialize};

/// Name/value label attached to a registered resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
    /// Label value.
    pub value: String,
}

/// Resource record as returned by a storage backend, tagged by kind.
///
/// The kind tag is an open set: backends may store kinds this version does
/// not know about, which is why projection dispatches on the string value
/// instead of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredResource {
    /// Stable resource kind tag, for example `node` or `db_server`.
    pub kind: String,
    /// Resource name.
    pub name: String,
    /// Hostname, supplied for server resources.
    pub hostname: Option<String>,
    /// Network address, supplied for servers and desktops.
    pub addr: Option<String>,
    /// Labels attached to the resource.
    pub labels: Vec<Label>,
    /// Logins the current user may use on this resource.
    pub logins: Vec<String>,
}

/// Unified resource projection consumed by the web app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedResource {
    /// Resource kind tag.
    pub kind: String,
    /// Display name.
    pub name: String,
    /// Labels attached to the resource.
    pub labels: Vec<Label>,
    /// Network address, supplied for servers and desktops.
    pub addr: Option<String>,
    /// SSH logins available on server resources.
    pub ssh_logins: Vec<String>,
    /// Logins available on desktop resources.
    pub logins: Vec<String>,
}
