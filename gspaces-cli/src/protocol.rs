//! Request/response types and dispatch.
//!
//! One JSON object per line in, one per line out:
//! `{"id": 1, "op": "linspace", "params": {"start": 0, "stop": 1, "count": 5}}`

use crate::catalog;
use crate::config::Config;
use gspaces::{ErrorReport, GeomspaceOptions, LinspaceOptions, LogspaceOptions, Space, SpaceError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

/// Error codes raised by the front end itself (library errors keep theirs)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const UNKNOWN_OP: &str = "UNKNOWN_OP";
    pub const INVALID_PARAMS: &str = "INVALID_PARAMS";
    pub const LIMIT_EXCEEDED: &str = "LIMIT_EXCEEDED";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const INTERNAL: &str = "INTERNAL";
}

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub op: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Response {
    fn ok(id: Option<JsonValue>, result: JsonValue) -> Self {
        Self { id, result: Some(result), error: None }
    }

    fn err(id: Option<JsonValue>, error: ErrorReport) -> Self {
        Self { id, result: None, error: Some(error) }
    }
}

/// Slice of a sequence to materialize into the response
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Window {
    offset: usize,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ArangeParams {
    start: f64,
    stop: f64,
    step: f64,
    #[serde(flatten)]
    window: Window,
}

#[derive(Debug, Deserialize)]
struct LinspaceParams {
    start: f64,
    stop: f64,
    #[serde(default)]
    return_step: bool,
    #[serde(flatten)]
    options: LinspaceOptions,
    #[serde(flatten)]
    window: Window,
}

#[derive(Debug, Deserialize)]
struct LogspaceParams {
    start: f64,
    stop: f64,
    #[serde(flatten)]
    options: LogspaceOptions,
    #[serde(flatten)]
    window: Window,
}

#[derive(Debug, Deserialize)]
struct GeomspaceParams {
    start: f64,
    stop: f64,
    #[serde(flatten)]
    options: GeomspaceOptions,
    #[serde(flatten)]
    window: Window,
}

#[derive(Debug, Deserialize)]
struct DescribeParams {
    name: String,
}

#[derive(Debug, Serialize)]
struct Slice {
    len: usize,
    offset: usize,
    values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<f64>,
}

#[derive(Debug, Serialize)]
struct OpList {
    ops: &'static [catalog::OpMeta],
}

/// Parse and answer one input line
pub fn handle_line(line: &str, config: &Config) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle_request(&request, config),
        Err(e) => Response::err(
            None,
            ErrorReport::new(codes::PARSE_ERROR, format!("Parse error: {}", e))
                .with_suggestion("Send one JSON object per line with an 'op' field"),
        ),
    }
}

pub fn handle_request(request: &Request, config: &Config) -> Response {
    debug!(op = %request.op, "processing");

    let result = match request.op.as_str() {
        "arange" => handle_arange(request, config),
        "linspace" => handle_linspace(request, config),
        "logspace" => handle_logspace(request, config),
        "geomspace" => handle_geomspace(request, config),
        "describe" => handle_describe(request),
        "list" => to_json(&OpList { ops: &catalog::OPS }),
        other => Err(ErrorReport::new(codes::UNKNOWN_OP, format!("Unknown op: {}", other))
            .with_suggestion("Use op 'list' to see available operations")),
    };

    match result {
        Ok(r) => Response::ok(request.id.clone(), r),
        Err(e) => Response::err(request.id.clone(), e),
    }
}

fn handle_arange(request: &Request, config: &Config) -> Result<JsonValue, ErrorReport> {
    let p: ArangeParams = params(request)?;
    let space = gspaces::arange(p.start, p.stop, p.step)?;
    slice(&space, &p.window, None, config)
}

fn handle_linspace(request: &Request, config: &Config) -> Result<JsonValue, ErrorReport> {
    let p: LinspaceParams = params(request)?;
    if p.return_step {
        let (space, step) = gspaces::linspace_with_step(p.start, p.stop, p.options)?;
        slice(&space, &p.window, step, config)
    } else {
        let space = gspaces::linspace_with(p.start, p.stop, p.options)?;
        slice(&space, &p.window, None, config)
    }
}

fn handle_logspace(request: &Request, config: &Config) -> Result<JsonValue, ErrorReport> {
    let p: LogspaceParams = params(request)?;
    let space = gspaces::logspace_with(p.start, p.stop, p.options)?;
    slice(&space, &p.window, None, config)
}

fn handle_geomspace(request: &Request, config: &Config) -> Result<JsonValue, ErrorReport> {
    let p: GeomspaceParams = params(request)?;
    let space = gspaces::geomspace_with(p.start, p.stop, p.options)?;
    slice(&space, &p.window, None, config)
}

fn handle_describe(request: &Request) -> Result<JsonValue, ErrorReport> {
    let p: DescribeParams = params(request)?;
    match catalog::find(&p.name) {
        Some(meta) => to_json(meta),
        None => Err(ErrorReport::new(codes::UNKNOWN_OP, format!("Unknown op: {}", p.name))
            .with_suggestion("Use op 'list' to see available operations")),
    }
}

fn params<T: DeserializeOwned>(request: &Request) -> Result<T, ErrorReport> {
    let value = request.params.clone().unwrap_or_else(|| json!({}));
    serde_json::from_value(value).map_err(|e| {
        ErrorReport::new(codes::INVALID_PARAMS, format!("{}() params: {}", request.op, e))
            .with_suggestion(format!("Use op 'describe' with name '{}' for usage", request.op))
    })
}

/// Materialize `window` of `space`, bounded by the configured maximum
fn slice<S>(space: &S, window: &Window, step: Option<f64>, config: &Config) -> Result<JsonValue, ErrorReport>
where
    S: Space<Value = f64>,
{
    let len = space.len();
    if window.offset > len {
        return Err(SpaceError::index_out_of_range(window.offset, len).into());
    }
    let available = len - window.offset;
    let take = window.limit.map_or(available, |limit| limit.min(available));
    if take > config.max_elements {
        return Err(ErrorReport::new(
            codes::LIMIT_EXCEEDED,
            format!("{} values requested, limit is {}", take, config.max_elements),
        )
        .with_suggestion("Request a smaller window with offset and limit"));
    }

    let values: Vec<f64> = space.iter().skip(window.offset).take(take).collect();
    // JSON has no encoding for inf/NaN
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        let index = window.offset + i;
        return Err(ErrorReport::new(
            codes::OVERFLOW,
            format!("value at index {} is not finite ({})", index, values[i]),
        )
        .with_suggestion(format!("Request a window ending before index {}", index)));
    }
    to_json(&Slice {
        len,
        offset: window.offset,
        values,
        step,
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<JsonValue, ErrorReport> {
    serde_json::to_value(value)
        .map_err(|e| ErrorReport::new(codes::INTERNAL, format!("Internal error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gspaces::codes as space_codes;

    fn call(line: &str) -> JsonValue {
        serde_json::to_value(handle_line(line, &Config::default())).unwrap()
    }

    fn values(response: &JsonValue) -> Vec<f64> {
        response["result"]["values"]
            .as_array()
            .expect("values")
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect()
    }

    #[test]
    fn test_linspace() {
        let r = call(r#"{"id": 1, "op": "linspace", "params": {"start": 0, "stop": 10, "count": 5}}"#);
        assert_eq!(r["id"], 1);
        assert_eq!(r["result"]["len"], 5);
        assert_eq!(values(&r), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert!(r["result"].get("step").is_none());
        assert!(r.get("error").is_none());
    }

    #[test]
    fn test_linspace_default_count() {
        let r = call(r#"{"op": "linspace", "params": {"start": 0, "stop": 1}}"#);
        assert_eq!(r["result"]["len"], 50);
        assert!(r.get("id").is_none());
    }

    #[test]
    fn test_linspace_return_step() {
        let r = call(r#"{"op": "linspace", "params": {"start": 0, "stop": 10, "count": 5, "return_step": true}}"#);
        assert_eq!(r["result"]["step"], 2.5);
    }

    #[test]
    fn test_linspace_without_return_step_has_no_step() {
        let r = call(r#"{"op": "linspace", "params": {"start": 0, "stop": 10, "count": 5, "return_step": false}}"#);
        assert!(r["result"].get("step").is_none());
        assert_eq!(values(&r), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_overflowing_values_are_reported() {
        let r = call(r#"{"op": "logspace", "params": {"start": 0, "stop": 400, "count": 3}}"#);
        assert_eq!(r["error"]["code"], codes::OVERFLOW);
        assert!(r["error"]["message"].as_str().unwrap().contains("index 2"));
        assert!(r.get("result").is_none());

        let r = call(r#"{"op": "logspace", "params": {"start": 0, "stop": 400, "count": 3, "limit": 2}}"#);
        let v = values(&r);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], 1.0);
        assert!((v[1] / 1e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_arange_window() {
        let r = call(r#"{"op": "arange", "params": {"start": 0, "stop": 10, "step": 3, "offset": 1, "limit": 2}}"#);
        assert_eq!(r["result"]["len"], 4);
        assert_eq!(r["result"]["offset"], 1);
        assert_eq!(values(&r), vec![3.0, 6.0]);
    }

    #[test]
    fn test_window_at_end_is_empty() {
        let r = call(r#"{"op": "arange", "params": {"start": 0, "stop": 10, "step": 3, "offset": 4}}"#);
        assert!(values(&r).is_empty());
    }

    #[test]
    fn test_window_past_end() {
        let r = call(r#"{"op": "arange", "params": {"start": 0, "stop": 10, "step": 3, "offset": 5}}"#);
        assert_eq!(r["error"]["code"], space_codes::INDEX_OUT_OF_RANGE);
    }

    #[test]
    fn test_logspace_base() {
        let r = call(r#"{"op": "logspace", "params": {"start": 0, "stop": 3, "count": 4, "base": 2}}"#);
        assert_eq!(values(&r), vec![1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn test_geomspace_endpoints() {
        let r = call(r#"{"op": "geomspace", "params": {"start": 1, "stop": 1000, "count": 4}}"#);
        let v = values(&r);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 1000.0);
    }

    #[test]
    fn test_geomspace_zero() {
        let r = call(r#"{"id": "g", "op": "geomspace", "params": {"start": 0, "stop": 100}}"#);
        assert_eq!(r["id"], "g");
        assert_eq!(r["error"]["code"], space_codes::DOMAIN_ERROR);
        assert!(r.get("result").is_none());
    }

    #[test]
    fn test_negative_count() {
        let r = call(r#"{"op": "linspace", "params": {"start": 0, "stop": 10, "count": -1}}"#);
        assert_eq!(r["error"]["code"], space_codes::INVALID_ARGUMENT);
    }

    #[test]
    fn test_limit_exceeded() {
        let config = Config { max_elements: 3 };
        let line = r#"{"op": "linspace", "params": {"start": 0, "stop": 1, "count": 10}}"#;
        let r = serde_json::to_value(handle_line(line, &config)).unwrap();
        assert_eq!(r["error"]["code"], codes::LIMIT_EXCEEDED);

        let line = r#"{"op": "linspace", "params": {"start": 0, "stop": 1, "count": 10, "offset": 8}}"#;
        let r = serde_json::to_value(handle_line(line, &config)).unwrap();
        assert_eq!(values(&r).len(), 2);
    }

    #[test]
    fn test_parse_error() {
        let r = call("not json");
        assert_eq!(r["error"]["code"], codes::PARSE_ERROR);
    }

    #[test]
    fn test_unknown_op() {
        let r = call(r#"{"op": "zeros"}"#);
        assert_eq!(r["error"]["code"], codes::UNKNOWN_OP);
    }

    #[test]
    fn test_missing_params() {
        let r = call(r#"{"op": "arange", "params": {"start": 0}}"#);
        assert_eq!(r["error"]["code"], codes::INVALID_PARAMS);
        let r = call(r#"{"op": "geomspace"}"#);
        assert_eq!(r["error"]["code"], codes::INVALID_PARAMS);
    }

    #[test]
    fn test_describe_and_list() {
        let r = call(r#"{"op": "describe", "params": {"name": "logspace"}}"#);
        assert_eq!(r["result"]["name"], "logspace");
        let r = call(r#"{"op": "describe", "params": {"name": "ones"}}"#);
        assert_eq!(r["error"]["code"], codes::UNKNOWN_OP);
        let r = call(r#"{"op": "list"}"#);
        assert_eq!(r["result"]["ops"].as_array().unwrap().len(), 4);
    }
}
