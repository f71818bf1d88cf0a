use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

/// One untyped record as it appears in the inventory document.
pub type RawRecord = Map<String, Value>;

/// The only accepted textual date format: `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' is missing from {kind} record")]
    MissingField { field: &'static str, kind: &'static str },

    #[error("Field '{0}' must be text")]
    NotText(&'static str),

    #[error("Field '{0}' must not be empty")]
    EmptyText(&'static str),

    #[error("Invalid date of receipt '{0}', expected 'DD.MM.YYYY'")]
    InvalidReceiptDate(String),

    #[error("Invalid write-off date '{0}', expected 'DD.MM.YYYY'")]
    InvalidWriteOffDate(String),

    #[error("Field '{0}' must be an integer")]
    NotInteger(&'static str),

    #[error("Field 'size' must be one of XS, S, M, L, XL, XXL, XXXL, got '{0}'")]
    InvalidSize(String),

    #[error("Dimensions must be in the format <int>x<int>x<int>, got '{0}'")]
    DimensionsFormat(String),

    #[error("Dimensions must be whole numbers, got '{0}'")]
    DimensionsNotNumeric(String),

    #[error("Dimensions must be positive numbers, got '{0}'")]
    DimensionsNotPositive(String),

    #[error("Field 'weight' must not be negative, got {0}")]
    NegativeWeight(i64),

    #[error("Write-off date {write_off} cannot precede date of receipt {receipt}")]
    WriteOffBeforeReceipt { write_off: String, receipt: String },
}

#[cfg(test)]
impl ValidationError {
    /// The record field this failure is about, when there is a single one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } => Some(*field),
            Self::NotText(field) | Self::EmptyText(field) | Self::NotInteger(field) => Some(*field),
            Self::InvalidReceiptDate(_) => Some("date_of_receipt"),
            Self::InvalidWriteOffDate(_) | Self::WriteOffBeforeReceipt { .. } => {
                Some("date_of_write_off")
            }
            Self::InvalidSize(_) => Some("size"),
            Self::DimensionsFormat(_)
            | Self::DimensionsNotNumeric(_)
            | Self::DimensionsNotPositive(_) => Some("dimensions"),
            Self::NegativeWeight(_) => Some("weight"),
        }
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// chrono's `%Y` also takes short, signed or space-padded years, so the
/// shape is checked first: one or two digit day and month, four digit year.
fn date_shape() -> Option<&'static Regex> {
    static SHAPE: OnceLock<Option<Regex>> = OnceLock::new();
    SHAPE
        .get_or_init(|| Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").ok())
        .as_ref()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !date_shape().is_some_and(|re| re.is_match(raw)) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Render a raw value for an error message without JSON quoting for strings.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn require_fields(
    record: &RawRecord,
    fields: &[&'static str],
    kind: &'static str,
) -> ValidationResult<()> {
    match fields.iter().find(|f| !record.contains_key(**f)) {
        Some(field) => Err(ValidationError::MissingField { field: *field, kind }),
        None => Ok(()),
    }
}

static NULL: Value = Value::Null;

/// Fetch a field that has already passed `require_fields`.
fn field<'a>(record: &'a RawRecord, name: &'static str) -> &'a Value {
    record.get(name).unwrap_or(&NULL)
}

pub fn text_field<'a>(record: &'a RawRecord, name: &'static str) -> ValidationResult<&'a str> {
    field(record, name)
        .as_str()
        .ok_or(ValidationError::NotText(name))
}

pub fn non_empty_text_field<'a>(
    record: &'a RawRecord,
    name: &'static str,
) -> ValidationResult<&'a str> {
    let text = text_field(record, name)?;
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText(name));
    }
    Ok(text)
}

/// Integer-typed values only: `5` passes, `"5"`, `5.0` and `true` do not.
pub fn integer_field(record: &RawRecord, name: &'static str) -> ValidationResult<i64> {
    field(record, name)
        .as_i64()
        .ok_or(ValidationError::NotInteger(name))
}

pub fn receipt_date_field(record: &RawRecord) -> ValidationResult<NaiveDate> {
    let value = field(record, "date_of_receipt");
    value
        .as_str()
        .and_then(parse_date)
        .ok_or_else(|| ValidationError::InvalidReceiptDate(display_value(value)))
}

/// Absent means "not written off"; present but malformed is a failure.
pub fn write_off_date_field(record: &RawRecord) -> ValidationResult<Option<NaiveDate>> {
    match record.get("date_of_write_off") {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .and_then(parse_date)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidWriteOffDate(display_value(value))),
    }
}

pub fn parse_write_off_date(raw: &str) -> ValidationResult<NaiveDate> {
    parse_date(raw).ok_or_else(|| ValidationError::InvalidWriteOffDate(raw.to_string()))
}

/// Split `WxLxH` into three positive integers.
pub fn parse_dimensions(raw: &str) -> ValidationResult<[i128; 3]> {
    let parts: Vec<&str> = raw.split('x').collect();
    if parts.len() != 3 {
        return Err(ValidationError::DimensionsFormat(raw.to_string()));
    }
    let mut dims = [0i128; 3];
    for (slot, part) in dims.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| ValidationError::DimensionsNotNumeric(raw.to_string()))?;
    }
    if dims.iter().any(|d| *d <= 0) {
        return Err(ValidationError::DimensionsNotPositive(raw.to_string()));
    }
    Ok(dims)
}
