//! Parses env-style `KEY=value` lines into typed values.
//!
//! Splitting is an ordinary fallible step returning an `Outcome`; value
//! conversion is a panicking function brought onto the rails with `lift`.

use outcome_rail::capture::lift;
use outcome_rail::Outcome;

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn parse_var(line: &str) -> Outcome<(String, String), String> {
    match line.split_once('=') {
        Some((key, val)) => Outcome::success((key.to_string(), val.to_string())),
        None => Outcome::failure(format!("missing '=' in line: {:?}", line)),
    }
}

/// Converts the raw value into a typed one. Panics are fine here; the caller
/// lifts this function before use.
fn convert_var((key, val): (String, String)) -> (String, Value) {
    let lowered = val.to_ascii_lowercase();
    if lowered == "true" || lowered == "false" {
        (key, Value::Bool(lowered == "true"))
    } else if !val.is_empty() && val.bytes().all(|b| b.is_ascii_digit()) {
        (key, Value::Int(val.parse().unwrap()))
    } else {
        (key, Value::Text(val))
    }
}

fn parse(content: &str) {
    let convert = lift(convert_var);

    for (idx, line) in content.lines().enumerate() {
        let report = parse_var(line)
            .and_then(|kv| convert(kv).map_failure(|panic| panic.to_string()))
            .map_or_else(
                |(key, value)| format!("[OK #{}] {} = {:?}", idx, key, value),
                |err| format!("[ERR #{}] {}", idx, err),
            );
        println!("{}", report);
    }
}

fn main() {
    // The default hook would interleave panic reports with the demo output.
    std::panic::set_hook(Box::new(|_| {}));

    let inputs = "\
HOST=localhost
PORT=8000
DEBUG=true
LOG_LEVEL=info
RETRIES=99999999999999999999
INVALID_LINE";

    parse(inputs);
}
