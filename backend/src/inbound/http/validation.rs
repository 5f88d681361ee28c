//! Shared validation helpers for inbound HTTP adapters.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidPage,
    InvalidJson,
    InvalidQuery,
    InvalidStatus,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidPage => "invalid_page",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::InvalidQuery => "invalid_query",
            ErrorCode::InvalidStatus => "invalid_status",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// JSON value accepted either as a number or as numeric text.
///
/// Clients send prices and quantities both ways; the domain parses the text
/// form, so numbers are carried through in their JSON representation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    pub fn into_text(self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text,
        }
    }
}

fn invalid_value_error(
    field: FieldName,
    message: String,
    code: ErrorCode,
    value: impl Into<String>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value.into(),
        "code": code.as_str(),
    }))
}

pub(crate) fn invalid_page_error(field: FieldName, value: &str) -> Error {
    let message = format!("{} must be a positive integer", field.as_str());
    invalid_value_error(field, message, ErrorCode::InvalidPage, value)
}

pub(crate) fn invalid_status_error(field: FieldName, value: &str) -> Error {
    let message = format!(
        "{} must be one of all, available, low, out_of_stock, expired",
        field.as_str()
    );
    invalid_value_error(field, message, ErrorCode::InvalidStatus, value)
}

/// Parse an optional one-based page parameter, falling back to `default`.
pub(crate) fn parse_positive(
    value: Option<&str>,
    field: FieldName,
    default: usize,
) -> Result<usize, Error> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(default);
    };
    match raw.parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(invalid_page_error(field, raw)),
    }
}

/// Turn malformed JSON bodies into `invalid_request` errors.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("request body is not valid JSON")
        .with_details(json!({
            "code": ErrorCode::InvalidJson.as_str(),
            "reason": err.to_string(),
        }))
        .into()
}

/// Turn undecodable query strings into `invalid_request` errors.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("query string is not valid")
        .with_details(json!({
            "code": ErrorCode::InvalidQuery.as_str(),
            "reason": err.to_string(),
        }))
        .into()
}
