//! Seam between the reporting loop and the network.

use crate::{ReportError, SettingRequest};
use async_trait::async_trait;

/// Status code that marks a setting as present.
pub const STATUS_OK: u16 = 200;

/// Status and body of one settings reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingReply {
    pub status: u16,
    /// Full body for a 200 reply; empty for any other status.
    pub body: Vec<u8>,
}

impl SettingReply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: STATUS_OK,
            body: body.into(),
        }
    }

    pub fn status_only(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Sends one settings request and hands back the reply.
///
/// Implementations read the body only when the status is 200 and map each
/// failure onto the matching [`ReportError`] variant: building the request,
/// sending it, or reading the body.
#[async_trait]
pub trait SettingsTransport: Send + Sync {
    async fn fetch(&self, request: &SettingRequest) -> Result<SettingReply, ReportError>;
}

#[async_trait]
impl<'a, T: SettingsTransport + ?Sized> SettingsTransport for &'a T {
    async fn fetch(&self, request: &SettingRequest) -> Result<SettingReply, ReportError> {
        (**self).fetch(request).await
    }
}
