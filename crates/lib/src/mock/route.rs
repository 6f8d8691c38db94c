use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};
use thiserror::Error;

use crate::{
    constant::{BAD_PARAMS_PREFIX, BODY_IS_EMPTY, BODY_PARAM, PARAMS_VALIDATE_ERROR_PREFIX},
    error::SdkError,
};

/// Per-parameter validation rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    /// Literal the request value must equal. It is compared as text, not as a type
    #[serde(default, rename = "type")]
    pub expected: String,
    #[serde(default, rename = "default")]
    pub default_value: Option<serde_json::Value>,
}

impl ParamDescriptor {
    pub fn required(description: &str) -> Self {
        Self { description: description.to_string(), required: true, ..Self::default() }
    }

    pub fn optional(description: &str) -> Self {
        Self { description: description.to_string(), ..Self::default() }
    }

    pub fn with_expected(mut self, expected: &str) -> Self {
        self.expected = expected.to_string();
        self
    }

    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// A registered path: canned response plus the expected request shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub params: BTreeMap<String, ParamDescriptor>,
}

impl Route {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into(), params: BTreeMap::new() }
    }

    /// Route that only demands a non-empty request body
    pub fn needing_body(response: impl Into<String>) -> Self {
        Self::new(response).with_param(BODY_PARAM, ParamDescriptor::optional("required body"))
    }

    pub fn with_param(mut self, key: &str, descriptor: ParamDescriptor) -> Self {
        self.params.insert(key.to_string(), descriptor);
        self
    }

    pub fn needs_body(&self) -> bool {
        self.params.contains_key(BODY_PARAM)
    }

    /// Validate a request against this route.
    ///
    /// Keys other than `body` are visited in sorted order and the first
    /// literal mismatch stops the walk.
    pub fn check_params<'a, F>(&self, body: RequestBody<'_>, form_value: F) -> ValidationOutcome
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut outcome = ValidationOutcome::default();

        if self.needs_body() {
            let bytes: &[u8] = match body {
                RequestBody::Bytes(bytes) => bytes,
                RequestBody::NotRead => &[],
                RequestBody::Unreadable => {
                    outcome.fatal = Some(ParamsError::BodyUnreadable);
                    return outcome;
                }
            };
            if bytes.is_empty() || contains_null(bytes) {
                outcome.failed.push(BODY_IS_EMPTY.to_string());
            }
        }

        for (key, descriptor) in self.params.iter().filter(|(key, _)| *key != BODY_PARAM) {
            let value = form_value(key).unwrap_or("");
            if descriptor.required && value.is_empty() {
                outcome.failed.push(key.clone());
            } else if !descriptor.expected.is_empty() && value != descriptor.expected {
                outcome.fatal = Some(ParamsError::BadTypeParam { key: key.clone() });
                break;
            }
        }

        outcome
    }
}

/// What the handler managed to collect from the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestBody<'a> {
    NotRead,
    Bytes(&'a [u8]),
    Unreadable,
}

fn contains_null(bytes: &[u8]) -> bool {
    bytes.windows(4).any(|window| window == b"null")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("failed during reading body")]
    BodyUnreadable,

    #[error("bad type param")]
    BadTypeParam { key: String },
}

/// Failed parameter keys plus at most one fatal error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub failed: Vec<String>,
    pub fatal: Option<ParamsError>,
}

impl ValidationOutcome {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty() && self.fatal.is_none()
    }

    /// Text of the 400 response, `None` when validation passed
    pub fn error_text(&self) -> Option<String> {
        if self.is_ok() {
            return None;
        }

        let mut text = String::new();
        if !self.failed.is_empty() {
            text.push_str(BAD_PARAMS_PREFIX);
            text.push_str(&self.failed.join(","));
        }
        if let Some(fatal) = &self.fatal {
            text.push_str(PARAMS_VALIDATE_ERROR_PREFIX);
            text.push_str(&fatal.to_string());
        }
        Some(text)
    }
}

/// Immutable path -> route mapping shared by a server's request handlers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    routes: BTreeMap<String, Route>,
}

impl RouteTable {
    pub fn new(routes: impl IntoIterator<Item = (String, Route)>) -> Self {
        Self { routes: routes.into_iter().collect() }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Exact match first, then the longest registered subtree pattern (ending in `/`)
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        if let Some(route) = self.routes.get(path) {
            return Some(route);
        }

        // Unlike ServeMux, `/account` is not redirected to a registered `/account/`
        self.routes
            .iter()
            .filter(|(pattern, _)| pattern.ends_with('/') && path.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, route)| route)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SdkError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SdkError::ConfigError(format!("Failed to read routes file: {e}"))
        })?;

        let table: RouteTable = toml::from_str(&contents).map_err(|e| {
            SdkError::ConfigError(format!("Failed to parse routes file: {e}"))
        })?;

        if let Some(bad) = table.paths().find(|path| !path.starts_with('/')) {
            return Err(SdkError::ConfigError(format!("Route path must start with '/': {bad}")));
        }

        Ok(table)
    }
}

impl From<HashMap<String, Route>> for RouteTable {
    fn from(routes: HashMap<String, Route>) -> Self {
        Self::new(routes)
    }
}

impl<const N: usize> From<[(&str, Route); N]> for RouteTable {
    fn from(routes: [(&str, Route); N]) -> Self {
        Self::new(routes.into_iter().map(|(path, route)| (path.to_string(), route)))
    }
}
