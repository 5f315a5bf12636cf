//! The reporting loop: one request per setting, in table order.

use crate::{
    ReportError, RequestContext, SETTINGS, SettingDescriptor, SettingValue, SettingsTransport,
};
use std::convert::Infallible;
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, info};

// =============================================================================
// REPORT LINES
// =============================================================================

/// Outcome for a single setting.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Value {
        label: &'static str,
        value: SettingValue,
    },
    /// The server answered with something other than 200.
    NotSet { label: &'static str },
}

impl ReportLine {
    pub fn label(&self) -> &'static str {
        match self {
            ReportLine::Value { label, .. } | ReportLine::NotSet { label } => label,
        }
    }

    pub fn value(&self) -> Option<&SettingValue> {
        match self {
            ReportLine::Value { value, .. } => Some(value),
            ReportLine::NotSet { .. } => None,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Value { label, value } => write!(f, "\t{label}: {value}"),
            ReportLine::NotSet { label } => write!(f, "\t{label} is not set"),
        }
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Lines produced by a run, plus the error that stopped it early, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    lines: Vec<ReportLine>,
    error: Option<ReportError>,
}

impl ReportOutcome {
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn error(&self) -> Option<&ReportError> {
        self.error.as_ref()
    }

    /// True when every setting in the table produced a line.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Number of lines produced before a fatal error, or `None` if the run
    /// completed.
    pub fn aborted_after(&self) -> Option<usize> {
        self.error.as_ref().map(|_| self.lines.len())
    }

    /// Printable output: one entry per line, then the diagnostic if the run
    /// was aborted.
    pub fn render(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(ToString::to_string)
            .chain(self.error.iter().map(ToString::to_string))
            .collect()
    }

    pub fn into_result(self) -> Result<Vec<ReportLine>, ReportError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.lines),
        }
    }
}

// =============================================================================
// REPORTER
// =============================================================================

/// Walks [`SETTINGS`] sequentially through a transport.
pub struct Reporter<T> {
    transport: T,
}

impl<T: SettingsTransport> Reporter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Query every setting in order, handing each line to `on_line` as soon
    /// as it is known. Stops at the first fatal error.
    pub async fn run<F>(&self, ctx: &RequestContext, mut on_line: F) -> ReportOutcome
    where
        F: FnMut(&ReportLine),
    {
        let result = self
            .try_run(ctx, |line| {
                on_line(line);
                Ok::<(), Infallible>(())
            })
            .await;
        match result {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like [`Reporter::run`], but a failing `on_line` stops the run before
    /// the next request is sent and its error is returned.
    pub async fn try_run<F, E>(
        &self,
        ctx: &RequestContext,
        mut on_line: F,
    ) -> Result<ReportOutcome, E>
    where
        F: FnMut(&ReportLine) -> Result<(), E>,
    {
        let mut lines = Vec::with_capacity(SETTINGS.len());

        for descriptor in SETTINGS.iter() {
            match self.report_setting(ctx, descriptor).await {
                Ok(line) => {
                    on_line(&line)?;
                    lines.push(line);
                }
                Err(error) => {
                    // The diagnostic itself goes to the report output.
                    info!(
                        setting = descriptor.id,
                        reported = lines.len(),
                        "Report aborted: {error}"
                    );
                    return Ok(ReportOutcome {
                        lines,
                        error: Some(error),
                    });
                }
            }
        }

        info!(
            base_address = ctx.base_address(),
            settings = lines.len(),
            "Report complete"
        );
        Ok(ReportOutcome { lines, error: None })
    }

    /// Run without a line callback.
    pub async fn collect(&self, ctx: &RequestContext) -> ReportOutcome {
        self.run(ctx, |_| {}).await
    }

    /// Run and write each line, then any diagnostic, to `out`. A write
    /// failure ends the run.
    pub async fn write_to<W: Write>(
        &self,
        ctx: &RequestContext,
        out: &mut W,
    ) -> io::Result<ReportOutcome> {
        let outcome = self
            .try_run(ctx, |line| writeln!(out, "{line}"))
            .await?;

        if let Some(error) = outcome.error() {
            writeln!(out, "{error}")?;
        }
        out.flush()?;
        Ok(outcome)
    }

    async fn report_setting(
        &self,
        ctx: &RequestContext,
        descriptor: &SettingDescriptor,
    ) -> Result<ReportLine, ReportError> {
        let request = ctx.request_for(descriptor);
        let reply = self.transport.fetch(&request).await?;
        debug!(url = %request.url, status = reply.status, "Fetched setting");

        if !reply.is_ok() {
            return Ok(ReportLine::NotSet {
                label: descriptor.label,
            });
        }

        let value = SettingValue::from_body(&reply.body)
            .map_err(|e| ReportError::decode(&request.url, e))?;
        Ok(ReportLine::Value {
            label: descriptor.label,
            value,
        })
    }
}
