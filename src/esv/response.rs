/// Response decoding: body → JSON object → passage.
use serde::Deserialize;
use serde_json::Value;

use super::errors::EsvError;
use super::transport::RawResponse;

/// Known fields of the text endpoint's JSON. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PassageResponse {
    /// Echo of the submitted reference.
    pub query: Option<String>,
    /// Normalized reference, e.g. "John 3:16".
    pub canonical: Option<String>,
    /// `null` is treated like a missing field.
    pub passages: Option<Vec<String>>,
    /// Present on authentication and validation errors.
    pub detail: Option<String>,
}

/// A passage ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub canonical: String,
    pub text: String,
}

/// Check the HTTP status and decode the body.
///
/// # Errors
///
/// `Status` for anything but 200, `EmptyBody` when there is nothing to
/// parse, otherwise whatever [`decode`] reports.
pub fn check(raw: RawResponse) -> Result<PassageResponse, EsvError> {
    if raw.status != 200 {
        return Err(EsvError::Status {
            code: raw.status,
            reason: raw.reason,
            body: raw.body,
        });
    }
    if raw.body.trim().is_empty() {
        return Err(EsvError::EmptyBody);
    }
    decode(&raw.body)
}

/// Parse `body` as a JSON object and pull out the known fields.
///
/// # Errors
///
/// `Parse` with line/column when the body is not JSON, `UnexpectedShape`
/// when the top level is not an object, `Decode` when a known field has the
/// wrong type.
pub fn decode(body: &str) -> Result<PassageResponse, EsvError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        // serde_json appends " at line L column C"; the variant carries those separately.
        let message = e.to_string();
        let message = message
            .split_once(" at line ")
            .map_or(message.as_str(), |(head, _)| head)
            .to_owned();
        EsvError::Parse {
            line: e.line(),
            column: e.column(),
            message,
            body: body.to_owned(),
        }
    })?;

    if !value.is_object() {
        return Err(EsvError::UnexpectedShape {
            kind: json_kind(&value),
            value: value.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| EsvError::Decode {
        message: e.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl PassageResponse {
    /// Join the passages and trim them for display.
    ///
    /// `reference` is the user's original input; it stands in for `query`
    /// and `canonical` when the API leaves them out.
    ///
    /// # Errors
    ///
    /// `NotFound` when `passages` is missing or empty.
    pub fn into_passage(self, reference: &str) -> Result<Passage, EsvError> {
        let query = self.query.unwrap_or_else(|| reference.to_owned());

        let passages = self.passages.unwrap_or_default();
        if passages.is_empty() {
            return Err(EsvError::NotFound {
                query,
                detail: self.detail,
            });
        }

        let text = passages.concat().trim().to_owned();
        let canonical = self.canonical.unwrap_or(query);

        Ok(Passage { canonical, text })
    }
}
