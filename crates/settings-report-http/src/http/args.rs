//! Go-style flag normalization.
//!
//! The reporter historically took `-fqdn` and `-api` with a single dash, and
//! also accepted `-flag=value`. clap only knows `--long`, so known long names
//! written with one dash are rewritten before parsing.

use std::ffi::OsString;

/// Long flags that may be written with a single dash.
pub const LONG_FLAGS: &[&str] = &["fqdn", "api", "tls-verify"];

/// Rewrite `-fqdn`, `-api=x` and friends to their `--` form.
///
/// The first element (program name) is left alone, and nothing after a bare
/// `--` is touched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().map(Into::into).enumerate() {
        if index == 0 || passthrough {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }
        normalized.push(normalize_arg(arg));
    }

    normalized
}

fn normalize_arg(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(rest) = text.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    if LONG_FLAGS.contains(&name) {
        OsString::from(format!("-{text}"))
    } else {
        arg
    }
}
