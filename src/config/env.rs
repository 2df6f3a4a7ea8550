//! Environment override lookup.

use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Source of configuration overrides.
///
/// Wraps the lookup so resolution can run against the real process
/// environment or a fixed map in tests.
pub struct EnvSource {
    lookup: Box<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl EnvSource {
    /// Reads from the process environment.
    pub fn process() -> Self {
        Self::new(|name| std::env::var(name).ok())
    }

    /// Reads from the given lookup function.
    pub fn new(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// The variable's value, if set and non-empty.
    pub fn var(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    /// The variable's value, or `default` when unset or empty.
    pub fn var_or(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| default.to_string())
    }

    /// Parses the variable's value, keeping `default` when unset. A value
    /// that does not parse is logged and ignored.
    pub fn parsed_or<T>(&self, name: &str, default: T) -> T
    where
        T: FromStr + Display + Copy,
    {
        match self.var(name) {
            None => default,
            Some(raw) => match raw.trim().parse() {
                Ok(value) => value,
                Err(_) => {
                    warn!("ignoring malformed {name}={raw:?}; using {default}");
                    default
                }
            },
        }
    }

    /// Parses a boolean override, keeping `default` when unset or malformed.
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        match self.var(name) {
            None => default,
            Some(raw) => match parse_bool(&raw) {
                Some(value) => value,
                None => {
                    warn!("ignoring malformed {name}={raw:?}; using {default}");
                    default
                }
            },
        }
    }
}

/// Accepted boolean forms: `1/true/t/yes/y/on` and `0/false/f/no/n/off`,
/// case-insensitive, surrounding whitespace ignored.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
