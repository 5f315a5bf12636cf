//! `reqwest` transport for the settings API.

use super::error::{
    body_read_error, client_setup_error, missing_scheme_error, request_build_error,
    transport_error, url_parse_error,
};
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use settings_report::{ReportError, SettingReply, SettingRequest, SettingsTransport};
use url::{ParseError, Url};

/// Whether the server's TLS certificate is checked.
///
/// Verification is off unless explicitly requested, so self-signed
/// management servers answer out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsVerification {
    #[default]
    Disabled,
    Enabled,
}

impl TlsVerification {
    pub fn from_flag(verify: bool) -> Self {
        if verify {
            TlsVerification::Enabled
        } else {
            TlsVerification::Disabled
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub tls: TlsVerification,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tls: TlsVerification::default(),
            user_agent: concat!("settings-report/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Build the underlying client. No request timeout is configured.
    pub fn build_client(&self) -> Result<reqwest::Client, ReportError> {
        reqwest::Client::builder()
            .danger_accept_invalid_certs(self.tls == TlsVerification::Disabled)
            .user_agent(&self.user_agent)
            .build()
            .map_err(client_setup_error)
    }
}

/// Sends settings requests with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ReportError> {
        Ok(Self::with_client(config.build_client()?))
    }

    /// Use a pre-built client, e.g. one with extra root certificates or
    /// default headers.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsTransport for HttpTransport {
    async fn fetch(&self, request: &SettingRequest) -> Result<SettingReply, ReportError> {
        let url = match Url::parse(&request.url) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) => {
                return Err(missing_scheme_error(&request.url));
            }
            Err(e) => return Err(url_parse_error(&request.url, e)),
        };

        let http_request = self
            .client
            .get(url)
            .header(CONTENT_TYPE, request.content_type)
            .header(AUTHORIZATION, &request.authorization)
            .build()
            .map_err(|e| request_build_error(&request.url, e))?;

        debug!("GET {}", request.url);
        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| transport_error(&request.url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("{} answered {status}", request.url);
            return Ok(SettingReply::status_only(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| body_read_error(&request.url, e))?;
        Ok(SettingReply::ok(body.to_vec()))
    }
}
