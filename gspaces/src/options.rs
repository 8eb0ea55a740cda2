//! Factory options and their defaults

use serde::{Deserialize, Serialize};

/// Number of samples when none is given
pub const DEFAULT_COUNT: i64 = 50;
/// Whether `stop` is included when not specified
pub const DEFAULT_ENDPOINT: bool = true;
/// Logarithm base for `logspace` when none is given
pub const DEFAULT_BASE: f64 = 10.0;

/// Options for [`crate::linspace_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinspaceOptions {
    pub count: i64,
    pub endpoint: bool,
}

impl Default for LinspaceOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            endpoint: DEFAULT_ENDPOINT,
        }
    }
}

impl LinspaceOptions {
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_endpoint(mut self, endpoint: bool) -> Self {
        self.endpoint = endpoint;
        self
    }
}

/// Options for [`crate::logspace_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogspaceOptions {
    pub count: i64,
    pub endpoint: bool,
    pub base: f64,
}

impl Default for LogspaceOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            endpoint: DEFAULT_ENDPOINT,
            base: DEFAULT_BASE,
        }
    }
}

impl LogspaceOptions {
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_endpoint(mut self, endpoint: bool) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }
}

/// Options for [`crate::geomspace_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeomspaceOptions {
    pub count: i64,
    pub endpoint: bool,
}

impl Default for GeomspaceOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            endpoint: DEFAULT_ENDPOINT,
        }
    }
}

impl GeomspaceOptions {
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_endpoint(mut self, endpoint: bool) -> Self {
        self.endpoint = endpoint;
        self
    }
}
