//! Issue record and its mapping from GitHub API objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// A GitHub issue reduced to its title, body and web URL
///
/// Serializes as `{"title": ..., "body": ..., "url": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    title: String,
    body: String,
    url: String,
}

/// Reasons a GitHub API object cannot be mapped to an [`Issue`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MappingError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing key '{0}'")]
    MissingKey(&'static str),

    #[error("key '{key}' should be {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}

impl Issue {
    pub fn new(title: impl Into<String>, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            url: url.into(),
        }
    }

    /// Map an issue object as returned by the GitHub API
    ///
    /// `title`, `body` and `html_url` are required; `html_url` becomes
    /// [`Issue::url`]. A `null` body maps to the empty string.
    ///
    /// # Example
    /// ```rust
    /// use ghcli_github::Issue;
    /// use serde_json::json;
    ///
    /// let issue = Issue::from_value(&json!({
    ///     "title": "T",
    ///     "body": "B",
    ///     "html_url": "https://x/y"
    /// }))
    /// .unwrap();
    /// assert_eq!(issue, Issue::new("T", "B", "https://x/y"));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, MappingError> {
        let object = value
            .as_object()
            .ok_or_else(|| MappingError::NotAnObject(json_kind(value)))?;

        let title = required_string(object, "title")?;
        let body = match object.get("body") {
            None => return Err(MappingError::MissingKey("body")),
            Some(Value::Null) => String::new(),
            Some(Value::String(body)) => body.clone(),
            Some(_) => {
                return Err(MappingError::WrongType {
                    key: "body",
                    expected: "a string or null",
                });
            }
        };
        let url = required_string(object, "html_url")?;

        Ok(Self { title, body, url })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the URL uses an HTTP(S) scheme
    pub fn has_web_url(&self) -> bool {
        self.url.starts_with("http")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.url, self.title, self.body)
    }
}

fn required_string(object: &Map<String, Value>, key: &'static str) -> Result<String, MappingError> {
    match object.get(key) {
        None => Err(MappingError::MissingKey(key)),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(MappingError::WrongType {
            key,
            expected: "a string",
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
