//! Core of the settings reporter.
//!
//! Queries a fixed list of settings from a management server's
//! `/v3/settings/<id>` API and turns each reply into a printable line. The
//! network transport is injected through [`SettingsTransport`], so the
//! reporting loop itself never touches a socket.

pub mod error;
pub mod report;
pub mod request;
pub mod settings;
pub mod telemetry;
pub mod transport;
pub mod value;

pub use error::{ReportError, ReportErrorKind};
pub use report::{ReportLine, ReportOutcome, Reporter};
pub use request::{CONTENT_TYPE_JSON, RequestContext, SETTINGS_PATH, SettingRequest};
pub use settings::{SETTINGS, SettingDescriptor};
pub use transport::{SettingReply, SettingsTransport};
pub use value::SettingValue;
