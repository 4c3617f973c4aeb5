//! ECMAScript number formatting and property-key classification.
//!
//! Reverse entries are keyed by `String(value)`, so numbers must stringify
//! exactly as `Number.prototype.toString()` does (`1`, `1.5`, `1e+21`,
//! `-0` → `"0"`). The same rules decide which property keys are array
//! indices and therefore enumerate first.

/// Converts a number to its JavaScript string representation.
pub fn js_number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        // Rust prints `1e21`; JavaScript prints `1e+21`.
        let mut formatted = format!("{:e}", value);
        if let Some(split) = formatted.find('e') {
            let (mantissa, exp) = formatted.split_at(split);
            let exp_digits = &exp[1..];
            let (sign, digits) = match exp_digits.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exp_digits),
            };
            let trimmed = digits.trim_start_matches('0');
            let digits = if trimmed.is_empty() { "0" } else { trimmed };
            formatted = format!("{mantissa}e{sign}{digits}");
        }
        return formatted;
    }

    value.to_string()
}

/// Checks if a string is the canonical spelling of a number.
///
/// Returns `true` for "NaN", "Infinity", "-Infinity" and any string that
/// round-trips through [`js_number_to_string`] (`"1"`, `"1.5"`), but not for
/// `"01"`, `"1.0"` or `" 1"`.
pub fn is_numeric_literal_name(name: &str) -> bool {
    if name == "NaN" || name == "Infinity" || name == "-Infinity" {
        return true;
    }

    let value: f64 = match name.parse() {
        Ok(value) => value,
        Err(_) => return false,
    };
    if !value.is_finite() {
        return false;
    }

    js_number_to_string(value) == name
}

/// Largest array index (`2^32 - 2`).
const MAX_ARRAY_INDEX: u64 = 4_294_967_294;

/// Returns the numeric index when `key` is an array index.
///
/// Array-index keys are canonical non-negative integers up to `2^32 - 2`;
/// objects enumerate them before every other key, in ascending order.
pub fn is_array_index(key: &str) -> Option<u32> {
    if key.is_empty() || key.len() > 10 {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u64 = key.parse().ok()?;
    if value > MAX_ARRAY_INDEX {
        return None;
    }
    u32::try_from(value).ok()
}

#[cfg(test)]
#[path = "../tests/js_number_tests.rs"]
mod tests;
