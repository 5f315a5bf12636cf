use super::test_utilities::{FakeTransport, Scripted};
use settings_report::{ReportLine, RequestContext, Reporter, SettingValue};
use std::io::{self, Write};

#[tokio::test]
async fn test_write_to_streams_lines_and_diagnostic() {
    let transport = FakeTransport::new(Scripted::ok(r#"{"value":"v1.4.0"}"#))
        .with("ui-index", Scripted::status(404))
        .with("cli-url-linux", Scripted::ok("{"));
    let reporter = Reporter::new(&transport);

    let mut out = Vec::new();
    let outcome = reporter
        .write_to(&RequestContext::new("https://rancher.local", "t"), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "\tReleased RKE version: v1.4.0");
    assert_eq!(lines[1], "\tUI Tag is not set");
    assert_eq!(lines[2], "\tUI Dashboard Index: v1.4.0");
    assert!(lines[3].starts_with("Error unmarshalling response:"));
    assert_eq!(outcome.aborted_after(), Some(3));
}

#[tokio::test]
async fn test_mixed_value_types_render_without_quotes() {
    let transport = FakeTransport::new(Scripted::ok(r#"{"value":"s"}"#))
        .with("rke-version", Scripted::ok(r#"{"value":3}"#))
        .with("ui-index", Scripted::ok(r#"{"value":false}"#))
        .with("ui-dashboard-index", Scripted::ok(r#"{"value":null}"#))
        .with("kdm-branch", Scripted::ok(r#"{"id":"kdm-branch"}"#));
    let reporter = Reporter::new(&transport);

    let outcome = reporter
        .collect(&RequestContext::new("https://rancher.local", "t"))
        .await;
    let lines = outcome.into_result().unwrap();

    assert_eq!(lines[0].to_string(), "\tReleased RKE version: 3");
    assert_eq!(lines[1].to_string(), "\tUI Tag: false");
    assert_eq!(lines[2].value(), Some(&SettingValue::Null));
    assert_eq!(
        lines[7],
        ReportLine::Value {
            label: "KDM branch",
            value: SettingValue::Absent,
        }
    );
    assert_eq!(lines[8].to_string(), "\tUI k8s supported versions range: s");
}

#[tokio::test]
async fn test_run_callback_sees_lines_before_abort() {
    let transport = FakeTransport::new(Scripted::ok(r#"{"value":"X"}"#))
        .with("ui-index", Scripted::ok("nope"));
    let reporter = Reporter::new(&transport);

    let mut seen = Vec::new();
    let outcome = reporter
        .run(&RequestContext::new("https://rancher.local", "t"), |line| {
            seen.push(line.to_string())
        })
        .await;

    assert_eq!(seen, vec!["\tReleased RKE version: X".to_string()]);
    assert!(!outcome.is_complete());
}

#[tokio::test]
async fn test_null_body_prints_line_and_run_continues() {
    let transport = FakeTransport::new(Scripted::ok(r#"{"value":"X"}"#))
        .with("ui-index", Scripted::ok("null"));
    let reporter = Reporter::new(&transport);

    let mut out = Vec::new();
    let outcome = reporter
        .write_to(&RequestContext::new("https://rancher.local", "t"), &mut out)
        .await
        .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.lines()[1].value(), Some(&SettingValue::Absent));
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 9);
    assert_eq!(text.lines().nth(1), Some("\tUI Tag: <no value>"));
    assert_eq!(transport.requests().len(), 9);
}

/// Accepts `remaining` writes, then fails every write.
struct BrokenPipe {
    remaining: usize,
}

impl Write for BrokenPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        }
        self.remaining -= 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_write_failure_stops_requests() {
    let transport = FakeTransport::new(Scripted::ok(r#"{"value":"X"}"#));
    let reporter = Reporter::new(&transport);

    let mut out = BrokenPipe { remaining: 0 };
    let err = reporter
        .write_to(&RequestContext::new("https://rancher.local", "t"), &mut out)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_try_run_returns_callback_error() {
    let transport = FakeTransport::new(Scripted::status(404));
    let reporter = Reporter::new(&transport);

    let mut seen = 0;
    let result = reporter
        .try_run(&RequestContext::new("https://rancher.local", "t"), |_| {
            seen += 1;
            if seen == 3 { Err("enough") } else { Ok(()) }
        })
        .await;

    assert_eq!(result.unwrap_err(), "enough");
    assert_eq!(transport.requests().len(), 3);
}
