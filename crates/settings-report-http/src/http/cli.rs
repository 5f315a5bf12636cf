//! Command-line interface for the settings reporter

use super::args::normalize_args;
use super::client::{ClientConfig, HttpTransport, TlsVerification};
use clap::Parser;
use settings_report::{ReportOutcome, Reporter, RequestContext};
use std::ffi::OsString;
use std::io;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "settings-report")]
#[command(about = "Print server settings exposed under /v3/settings")]
#[command(version)]
pub struct Cli {
    /// Server base address, e.g. https://<server FQDN>
    #[arg(long, env = "SETTINGS_REPORT_FQDN", default_value = "")]
    pub fqdn: String,

    /// API bearer token
    #[arg(
        long,
        env = "SETTINGS_REPORT_API_TOKEN",
        default_value = "",
        hide_env_values = true
    )]
    pub api: String,

    /// Verify the server's TLS certificate (skipped by default)
    #[arg(long)]
    pub tls_verify: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn try_parse_normalized_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    pub fn request_context(&self) -> RequestContext {
        RequestContext::new(self.fqdn.clone(), self.api.clone())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            tls: TlsVerification::from_flag(self.tls_verify),
            ..ClientConfig::default()
        }
    }
}

/// Run the report against the server named on the command line, writing the
/// lines and any diagnostic to `out`.
///
/// Fatal errors end up as the last printed line rather than a failure exit.
pub async fn run_report<W: io::Write>(
    cli: &Cli,
    out: &mut W,
) -> io::Result<Option<ReportOutcome>> {
    let transport = match HttpTransport::new(&cli.client_config()) {
        Ok(transport) => transport,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(None);
        }
    };

    let reporter = Reporter::new(transport);
    let outcome = reporter.write_to(&cli.request_context(), out).await?;
    Ok(Some(outcome))
}

pub async fn handle_cli(cli: Cli) {
    let mut stdout = io::stdout();
    if let Err(e) = run_report(&cli, &mut stdout).await {
        error!("Failed to write report: {e}");
    }
}
