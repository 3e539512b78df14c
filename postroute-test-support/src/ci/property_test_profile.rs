//! Property-test run profile shared by every postroute suite.
//!
//! CI raises case counts through the environment; local runs keep each
//! suite's own default.

use std::{env, fmt};

/// Environment variable overriding the number of proptest cases.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const POSTROUTE_PBT_FORK_ENV_KEY: &str = "POSTROUTE_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, falling back to the suite's
    /// defaults when a variable is absent or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use postroute_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(POSTROUTE_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

/// Why an override was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
enum OverrideError {
    NotANumber(String),
    ZeroCases,
    NotASwitch,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(reason) => write!(f, "not a case count: {reason}"),
            Self::ZeroCases => f.write_str("case count must be positive"),
            Self::NotASwitch => f.write_str("expected true/false, 1/0, yes/no or on/off"),
        }
    }
}

fn override_or<T: Copy>(
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %reason,
            "ignoring property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(err) => Err(OverrideError::NotANumber(err.to_string())),
    }
}

fn parse_switch(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotASwitch),
    }
}
