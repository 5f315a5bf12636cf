//! The fixed table of settings the reporter queries.

/// One named server-side setting: the identifier used in the REST path and
/// the label printed next to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

impl SettingDescriptor {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Settings in report order. Output lines follow this order exactly.
pub static SETTINGS: [SettingDescriptor; 9] = [
    SettingDescriptor::new("rke-version", "Released RKE version"),
    SettingDescriptor::new("ui-index", "UI Tag"),
    SettingDescriptor::new("ui-dashboard-index", "UI Dashboard Index"),
    SettingDescriptor::new("cli-url-linux", "CLI URL (Linux)"),
    SettingDescriptor::new("cli-url-darwin", "CLI URL (Darwin)"),
    SettingDescriptor::new("cli-url-windows", "CLI URL (Windows)"),
    SettingDescriptor::new("system-catalog", "System Chart Catalog"),
    SettingDescriptor::new("kdm-branch", "KDM branch"),
    SettingDescriptor::new(
        "ui-k8s-supported-versions-range",
        "UI k8s supported versions range",
    ),
];
