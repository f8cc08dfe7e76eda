//! # Request Validation
//!
//! Each collection has an explicit validator that turns a raw JSON body into either a
//! normalized payload ([`ProductDraft`](crate::model::ProductDraft),
//! [`MessagePatch`](crate::model::MessagePatch), ...) or a [`ValidationErrors`] listing
//! every failing field. Validators never touch the store, so they are tested on their own.
//!
//! Normalization happens here too: text is trimmed, emails are lower-cased, and prices
//! sent as numeric strings are coerced to numbers.

pub mod message;
pub mod product;

use serde_json::{Map, Value};

/// One failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

/// Every field error found in one request body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} validation failed: {}", summary(.errors))]
pub struct ValidationErrors {
    pub kind: &'static str,
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(kind: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            kind,
            errors: vec![FieldError {
                field,
                reason: reason.into(),
            }],
        }
    }

    /// True if `field` is among the failures.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

const REQUIRED: &str = "is required";

/// Reads typed fields out of a JSON object, collecting failures as it goes.
pub(crate) struct FieldReader<'a> {
    kind: &'static str,
    body: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(kind: &'static str, body: &'a Value) -> Result<Self, ValidationErrors> {
        match body {
            Value::Object(body) => Ok(Self {
                kind,
                body,
                errors: Vec::new(),
            }),
            _ => Err(ValidationErrors::single(
                kind,
                "body",
                "must be a JSON object",
            )),
        }
    }

    pub(crate) fn fail(&mut self, field: &'static str, reason: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            reason: reason.into(),
        });
    }

    fn is_present(&self, field: &str) -> bool {
        self.body.contains_key(field)
    }

    /// A required, non-empty string. Trimmed unless `trim` is false, in which case
    /// whitespace counts as content.
    pub(crate) fn required_text(&mut self, field: &'static str, trim: bool) -> Option<String> {
        match self.body.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, REQUIRED);
                None
            }
            Some(Value::String(raw)) => {
                let blank = if trim { raw.trim().is_empty() } else { raw.is_empty() };
                if blank {
                    self.fail(field, REQUIRED);
                    None
                } else if trim {
                    Some(raw.trim().to_string())
                } else {
                    Some(raw.clone())
                }
            }
            Some(_) => {
                self.fail(field, "must be a string");
                None
            }
        }
    }

    /// Like [`FieldReader::required_text`], but only checked when the field is supplied.
    pub(crate) fn text_if_present(&mut self, field: &'static str, trim: bool) -> Option<String> {
        if self.is_present(field) {
            self.required_text(field, trim)
        } else {
            None
        }
    }

    /// An optional trimmed string.
    ///
    /// `None`: not supplied. `Some(None)`: explicitly null or blank. `Some(Some(s))`: a value.
    pub(crate) fn optional_text(&mut self, field: &'static str) -> Option<Option<String>> {
        match self.body.get(field)? {
            Value::Null => Some(None),
            Value::String(raw) => {
                let trimmed = raw.trim();
                Some((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
            _ => {
                self.fail(field, "must be a string");
                None
            }
        }
    }

    /// A required non-negative number. Numeric strings are coerced.
    pub(crate) fn required_price(&mut self, field: &'static str) -> Option<f64> {
        let value = match self.body.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, REQUIRED);
                return None;
            }
            Some(value) => value,
        };
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match parsed {
            Some(price) if !price.is_finite() => {
                self.fail(field, "must be a valid number");
                None
            }
            Some(price) if price < 0.0 => {
                self.fail(field, "must not be negative");
                None
            }
            Some(price) => Some(price),
            None => {
                self.fail(field, "must be a valid number");
                None
            }
        }
    }

    pub(crate) fn price_if_present(&mut self, field: &'static str) -> Option<f64> {
        if self.is_present(field) {
            self.required_price(field)
        } else {
            None
        }
    }

    /// An optional boolean flag. `null` counts as not supplied.
    pub(crate) fn flag(&mut self, field: &'static str) -> Option<bool> {
        match self.body.get(field)? {
            Value::Bool(flag) => Some(*flag),
            Value::Null => None,
            _ => {
                self.fail(field, "must be a boolean");
                None
            }
        }
    }

    /// Returns `value` if no field failed, otherwise every collected error.
    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationErrors {
                kind: self.kind,
                errors: self.errors,
            }),
        }
    }
}
