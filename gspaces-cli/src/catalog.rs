//! Self-description of the operations the front end accepts

use serde::Serialize;

/// Metadata about an operation argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self { name, typ, description, optional: false, default: None }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str, default: &'static str) -> Self {
        Self { name, typ, description, optional: true, default: Some(default) }
    }
}

/// Metadata for one sequence operation
#[derive(Debug, Clone, Serialize)]
pub struct OpMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
    pub related: &'static [&'static str],
}

const OFFSET: ArgMeta = ArgMeta::optional("offset", "Integer", "First index to return", "0");
const LIMIT: ArgMeta = ArgMeta::optional("limit", "Integer", "Maximum number of values to return", "rest of sequence");
const COUNT: ArgMeta = ArgMeta::optional("count", "Integer", "Number of samples, non-negative", "50");
const ENDPOINT: ArgMeta = ArgMeta::optional("endpoint", "Bool", "Whether stop is the last sample", "true");

static ARANGE_ARGS: [ArgMeta; 5] = [
    ArgMeta::required("start", "Number", "Start of interval (inclusive)"),
    ArgMeta::required("stop", "Number", "End of interval (exclusive)"),
    ArgMeta::required("step", "Number", "Spacing between values, non-zero"),
    OFFSET,
    LIMIT,
];

static LINSPACE_ARGS: [ArgMeta; 7] = [
    ArgMeta::required("start", "Number", "Starting value"),
    ArgMeta::required("stop", "Number", "End value, unless endpoint is false"),
    COUNT,
    ENDPOINT,
    ArgMeta::optional("return_step", "Bool", "Also return the spacing between samples", "false"),
    OFFSET,
    LIMIT,
];

static LOGSPACE_ARGS: [ArgMeta; 7] = [
    ArgMeta::required("start", "Number", "base ** start is the first value"),
    ArgMeta::required("stop", "Number", "base ** stop is the last value, unless endpoint is false"),
    COUNT,
    ENDPOINT,
    ArgMeta::optional("base", "Number", "Base of the log space", "10"),
    OFFSET,
    LIMIT,
];

static GEOMSPACE_ARGS: [ArgMeta; 6] = [
    ArgMeta::required("start", "Number", "First value, non-zero"),
    ArgMeta::required("stop", "Number", "Last value unless endpoint is false, non-zero"),
    COUNT,
    ENDPOINT,
    OFFSET,
    LIMIT,
];

static ARANGE_EXAMPLES: [&str; 2] = [
    "arange(0, 10, 3) → [0, 3, 6, 9]",
    "arange(5, 0, -2) → [5, 3, 1]",
];

static LINSPACE_EXAMPLES: [&str; 2] = [
    "linspace(0, 10, 5) → [0, 2.5, 5, 7.5, 10]",
    "linspace(0, 10, 5, endpoint=false) → [0, 2, 4, 6, 8]",
];

static LOGSPACE_EXAMPLES: [&str; 2] = [
    "logspace(0, 3, 4) → [1, 10, 100, 1000]",
    "logspace(0, 3, 4, base=2) → [1, 2, 4, 8]",
];

static GEOMSPACE_EXAMPLES: [&str; 1] = ["geomspace(1, 1000, 4) → [1, 10, 100, 1000]"];

pub static OPS: [OpMeta; 4] = [
    OpMeta {
        name: "arange",
        description: "Evenly spaced values within the half-open interval [start, stop)",
        usage: "arange(start, stop, step)",
        args: &ARANGE_ARGS,
        returns: "List<Number>",
        examples: &ARANGE_EXAMPLES,
        related: &["linspace"],
    },
    OpMeta {
        name: "linspace",
        description: "count evenly spaced samples over [start, stop] or [start, stop)",
        usage: "linspace(start, stop, [count], [endpoint], [return_step])",
        args: &LINSPACE_ARGS,
        returns: "List<Number>",
        examples: &LINSPACE_EXAMPLES,
        related: &["arange", "logspace"],
    },
    OpMeta {
        name: "logspace",
        description: "Numbers spaced evenly on a log scale between base ** start and base ** stop",
        usage: "logspace(start, stop, [count], [endpoint], [base])",
        args: &LOGSPACE_ARGS,
        returns: "List<Number>",
        examples: &LOGSPACE_EXAMPLES,
        related: &["linspace", "geomspace"],
    },
    OpMeta {
        name: "geomspace",
        description: "Geometric progression with exact endpoints start and stop",
        usage: "geomspace(start, stop, [count], [endpoint])",
        args: &GEOMSPACE_ARGS,
        returns: "List<Number>",
        examples: &GEOMSPACE_EXAMPLES,
        related: &["logspace"],
    },
];

/// Look up an operation by name
pub fn find(name: &str) -> Option<&'static OpMeta> {
    OPS.iter().find(|op| op.name == name)
}
