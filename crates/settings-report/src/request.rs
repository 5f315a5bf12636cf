//! Request construction for the settings API.

use crate::settings::SettingDescriptor;
use std::fmt;

/// Path prefix appended to the base address for every setting.
pub const SETTINGS_PATH: &str = "/v3/settings/";

/// Content type sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Base address and credential shared by every request of a run.
///
/// Neither field is validated: the base address is concatenated as given and
/// the token is forwarded verbatim, so an empty token yields `Bearer `.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestContext {
    base_address: String,
    token: String,
}

impl RequestContext {
    pub fn new(base_address: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_address: base_address.into(),
            token: token.into(),
        }
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    /// Target URL for a setting identifier. The identifier is not URL-encoded.
    pub fn settings_url(&self, id: &str) -> String {
        format!("{}{SETTINGS_PATH}{id}", self.base_address)
    }

    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn request_for(&self, descriptor: &SettingDescriptor) -> SettingRequest {
        SettingRequest {
            url: self.settings_url(descriptor.id),
            content_type: CONTENT_TYPE_JSON,
            authorization: self.authorization(),
        }
    }
}

// Keeps the token out of logs.
impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("base_address", &self.base_address)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A single GET against the settings API, ready for a transport to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRequest {
    pub url: String,
    pub content_type: &'static str,
    pub authorization: String,
}
