use crate::core::ErrorCollection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Uniform response wrapper used by every customer endpoint
///
/// ```json
/// { "IsSuccessStatusCode": true, "Results": ..., "Errors": ... }
/// ```
/// `Results` and `Errors` are omitted when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = ()> {
    #[serde(rename = "IsSuccessStatusCode")]
    pub is_success_status_code: bool,
    #[serde(rename = "Results", default, skip_serializing_if = "Option::is_none")]
    pub results: Option<T>,
    #[serde(rename = "Errors", default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorPayload>,
}

impl<T> Envelope<T> {
    pub fn ok(results: T) -> Self {
        Self {
            is_success_status_code: true,
            results: Some(results),
            errors: None,
        }
    }
}

impl Envelope {
    /// Success flag only, used by the mutation endpoints
    pub fn success() -> Self {
        Self {
            is_success_status_code: true,
            results: None,
            errors: None,
        }
    }

    pub fn failure(errors: impl Into<ErrorPayload>) -> Self {
        Self {
            is_success_status_code: false,
            results: None,
            errors: Some(errors.into()),
        }
    }
}

/// Body of the `Errors` member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    /// A literal message or a fault description
    Message(String),
    /// Business-rule violations, in the order they were raised
    Messages(Vec<String>),
    /// Schema validation failures keyed by wire field name
    Fields(BTreeMap<String, Vec<String>>),
}

impl From<&str> for ErrorPayload {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for ErrorPayload {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&ErrorCollection> for ErrorPayload {
    fn from(errors: &ErrorCollection) -> Self {
        Self::Messages(errors.messages())
    }
}

impl From<&ValidationErrors> for ErrorPayload {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let name = to_camel_case(&field);
            let messages = field_errors.iter().map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("The {name} field is invalid ({})", error.code),
            });
            fields.entry(name.clone()).or_default().extend(messages);
        }
        Self::Fields(fields)
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
