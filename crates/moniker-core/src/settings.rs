// SPDX-License-Identifier: Apache-2.0
//! Runtime toggle for the reversible transcoding path.
//!
//! The codec itself takes [`EncodeMode`] as an explicit parameter; this
//! module is the thin adapter at the process boundary that derives the
//! mode from the environment. The variable is read once per call and
//! never cached across calls, so the toggle can be flipped at runtime.

use std::ffi::OsStr;
use std::sync::Once;

use moniker_transcode::EncodeMode;

/// Environment variable controlling the reversible transcoding path.
///
/// Unset means enabled. `1`/`true`/`on`/`yes` enable it,
/// `0`/`false`/`off`/`no` disable it (case-insensitive). Anything else
/// disables it and emits a one-time diagnostic rather than failing.
pub const TRANSCODING_ENV_VAR: &str = "MONIKER_TRANSCODING";

/// Reads the current encode mode from the environment.
#[must_use]
pub fn encode_mode() -> EncodeMode {
    match std::env::var_os(TRANSCODING_ENV_VAR) {
        None => EncodeMode::Bootstring,
        Some(value) => match value.to_str().and_then(parse_toggle) {
            Some(mode) => mode,
            None => {
                warn_unrecognized(&value);
                EncodeMode::Substitute
            }
        },
    }
}

/// Parses a boolean-ish toggle value. `None` means unrecognized.
fn parse_toggle(value: &str) -> Option<EncodeMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(EncodeMode::Bootstring),
        "0" | "false" | "off" | "no" => Some(EncodeMode::Substitute),
        _ => None,
    }
}

fn warn_unrecognized(value: &OsStr) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        tracing::warn!(
            value = ?value,
            "unrecognized {TRANSCODING_ENV_VAR} value; reversible transcoding disabled"
        );
    });
}
