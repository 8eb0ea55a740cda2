//! Runtime configuration read from the environment

use std::env;
use tracing::warn;

/// Variable bounding how many values one response may carry
pub const MAX_ELEMENTS_VAR: &str = "GSPACES_MAX_ELEMENTS";
pub const DEFAULT_MAX_ELEMENTS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_elements: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            max_elements: parse_max_elements(env::var(MAX_ELEMENTS_VAR).ok().as_deref()),
        }
    }
}

fn parse_max_elements(raw: Option<&str>) -> usize {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_MAX_ELEMENTS,
        Some(s) => match s.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                warn!(value = s, "invalid {}, using {}", MAX_ELEMENTS_VAR, DEFAULT_MAX_ELEMENTS);
                DEFAULT_MAX_ELEMENTS
            }
        },
    }
}
