//! Lenient field helpers shared by the adapters.
//!
//! Upstream payloads mix numbers and numeric strings, and treat empty strings
//! and zeros as "absent".

use serde_json::Value;

/// First candidate that is present and not blank.
pub fn first_text<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// Whether a JSON value counts as supplied: not null, empty, zero, or false.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a scalar as display text. Zero, blank, and non-scalars are absent.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => first_text([Some(s.as_str())]).map(str::to_string),
        Value::Number(n) if is_present(value) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a population count from a number or the leading digits of a string.
///
/// Returns `None` for anything that yields no positive integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_population(value: &Value) -> Option<u64> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 1.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => {
            let trimmed = s.trim_start();
            let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
            let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
            digits.parse::<u64>().ok()
        }
        _ => None,
    };
    parsed.filter(|&n| n > 0)
}

/// Format an integer with comma thousands separators.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
