use tracing::warn;

use crate::error::ValidationError;
use crate::models::{Gender, RequestParams};

pub const MIN_COUNT: u8 = 1;
pub const MAX_COUNT: u8 = 5;

/// Read side of the form plus the helper line under the count field.
pub trait FormSurface {
    fn count_text(&self) -> String;
    fn gender_text(&self) -> String;
    fn set_count_help(&self, text: &str);
}

/// Echoes the raw count text; no validation happens while typing.
pub fn helper_text(raw: &str) -> String {
    if raw.is_empty() {
        "Users to fetch: ?".to_string()
    } else {
        format!("Users to fetch: {raw}")
    }
}

pub fn parse_count(raw: &str) -> Result<u8, ValidationError> {
    let invalid = || ValidationError {
        input: raw.to_string(),
        min: MIN_COUNT,
        max: MAX_COUNT,
    };

    let value = parse_number(raw.trim()).ok_or_else(invalid)?;

    // NaN and infinities fail the fract check too.
    if value.fract() != 0.0 || value < f64::from(MIN_COUNT) || value > f64::from(MAX_COUNT) {
        return Err(invalid());
    }

    Ok(value as u8)
}

/// Decimal text, or an unsigned integer with a `0x`/`0b`/`0o` prefix.
fn parse_number(text: &str) -> Option<f64> {
    let lower = text.to_ascii_lowercase();
    let radix = match lower.get(..2) {
        Some("0x") => 16,
        Some("0b") => 2,
        Some("0o") => 8,
        _ => return text.parse().ok(),
    };

    let digits = &lower[2..];
    if digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
}

/// Empty selection means no filter. Unknown values are dropped.
pub fn parse_gender(raw: &str) -> Option<Gender> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if value.eq_ignore_ascii_case("female") {
        Some(Gender::Female)
    } else if value.eq_ignore_ascii_case("male") {
        Some(Gender::Male)
    } else {
        warn!(gender = value, "ignoring unrecognised gender filter");
        None
    }
}

pub fn read_request(form: &dyn FormSurface) -> Result<RequestParams, ValidationError> {
    let count = parse_count(&form.count_text())?;
    let gender = parse_gender(&form.gender_text());
    Ok(RequestParams { count, gender })
}
