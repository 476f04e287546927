//! Environment overrides for property-based test runs.
//!
//! CI tunes proptest through two variables: `BMSSP_PBT_CASES` replaces the
//! suite's default case count and `BMSSP_PBT_FORK` runs each case in a
//! subprocess. Invalid values fall back to the default with a warning, so a
//! typo in a pipeline definition degrades a run instead of aborting it.

use std::env;

/// Environment variable overriding the proptest case count.
pub const CASES_ENV_KEY: &str = "BMSSP_PBT_CASES";
/// Environment variable enabling proptest process forking.
pub const FORK_ENV_KEY: &str = "BMSSP_PBT_FORK";

/// Number of proptest cases to run: the environment override when set and
/// positive, otherwise `default`.
#[must_use]
pub fn cases(default: u32) -> u32 {
    let Ok(raw) = env::var(CASES_ENV_KEY) else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(parsed) if parsed > 0 => parsed,
        _ => {
            tracing::warn!(
                env = CASES_ENV_KEY,
                raw = %raw,
                default,
                "ignoring invalid case-count override"
            );
            default
        }
    }
}

/// Whether proptest should fork per case. Off unless the environment says
/// `1`/`true`/`yes` (case-insensitive).
#[must_use]
pub fn fork() -> bool {
    let Ok(raw) = env::var(FORK_ENV_KEY) else {
        return false;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => true,
        "0" | "false" | "no" => false,
        _ => {
            tracing::warn!(
                env = FORK_ENV_KEY,
                raw = %raw,
                "ignoring invalid fork override"
            );
            false
        }
    }
}
