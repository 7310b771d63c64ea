//! Operation routing and response decoding.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::LocationError;
use super::http::{HttpMethod, HttpResponse};

/// Host prefix of control plane tracker operations.
pub const CP_TRACKING: &str = "cp.tracking.";
/// Host prefix of tracker data plane operations.
pub const TRACKING: &str = "tracking.";
pub const CP_GEOFENCING: &str = "cp.geofencing.";
pub const GEOFENCING: &str = "geofencing.";
pub const CP_MAPS: &str = "cp.maps.";
pub const MAPS: &str = "maps.";
pub const CP_PLACES: &str = "cp.places.";
pub const PLACES: &str = "places.";
pub const CP_ROUTES: &str = "cp.routes.";
pub const ROUTES: &str = "routes.";
/// Host prefix of API key and tagging operations.
pub const CP_METADATA: &str = "cp.metadata.";

/// Where and how an operation is sent.
///
/// Segments are kept unencoded; each one becomes exactly one path segment
/// when the URL is built, so members containing `/` stay intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub host_prefix: &'static str,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
}

impl Route {
    pub fn new(method: HttpMethod, host_prefix: &'static str) -> Self {
        Self {
            method,
            host_prefix,
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Appends a literal path segment.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends a required URI member as a path segment.
    pub fn member(
        self,
        value: Option<&String>,
        name: &'static str,
    ) -> Result<Self, LocationError> {
        match value {
            Some(value) if !value.is_empty() => Ok(self.segment(value.as_str())),
            _ => Err(LocationError::MissingParameter(name)),
        }
    }

    /// Appends an optional query member; `None` adds nothing.
    pub fn query<V: QueryValue>(mut self, name: &str, value: Option<&V>) -> Self {
        if let Some(value) = value {
            value.append_to(name, &mut self.query);
        }
        self
    }

    /// Path as `/a/b/c`, unencoded. Used for logging and tests.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn has_query(&self, name: &str) -> bool {
        self.query.iter().any(|(k, _)| k == name)
    }
}

/// Values that can be carried in the query string.
pub trait QueryValue {
    fn append_to(&self, name: &str, query: &mut Vec<(String, String)>);
}

impl QueryValue for String {
    fn append_to(&self, name: &str, query: &mut Vec<(String, String)>) {
        query.push((name.to_string(), self.clone()));
    }
}

impl QueryValue for bool {
    fn append_to(&self, name: &str, query: &mut Vec<(String, String)>) {
        query.push((name.to_string(), self.to_string()));
    }
}

/// Lists repeat the parameter once per element.
impl QueryValue for Vec<String> {
    fn append_to(&self, name: &str, query: &mut Vec<(String, String)>) {
        query.extend(self.iter().map(|v| (name.to_string(), v.clone())));
    }
}

/// A service operation: a request shape that knows how to route itself.
pub trait Operation: Serialize {
    type Output: FromResponse;

    /// Operation name, e.g. `CreateTracker`.
    const NAME: &'static str;

    /// Whether the operation accepts an API key in the `key` query member.
    const ACCEPTS_API_KEY: bool = false;

    fn route(&self) -> Result<Route, LocationError>;
}

/// Decodes a successful response into a result shape.
pub trait FromResponse: Sized {
    fn from_response(response: HttpResponse) -> Result<Self, LocationError>;
}

/// Decodes a JSON body. An empty body reads as `{}`.
pub(crate) fn from_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, LocationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_str("{}")?);
    }
    Ok(serde_json::from_slice(body)?)
}
