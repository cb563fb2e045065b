//! Path parameters and resolved paths.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use super::{EndpointError, EndpointResult};

/// Values for template placeholders other than `version`.
///
/// Ordered so that iteration (and therefore error reporting) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value for `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K, V> FromIterator<(K, V)> for PathParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// A request path with every placeholder substituted.
///
/// Parameter values and joined segments are percent-encoded, so the path
/// never contains a `{...}` token, and each value stays in its own segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub(crate) const fn new(path: String) -> Self {
        Self(path)
    }

    /// Append one percent-encoded path segment.
    ///
    /// Used for sub-resources such as `<collection>/<id>` or `<id>/log`.
    /// Empty, `.` and `..` segments are rejected.
    pub fn join(self, segment: &str) -> EndpointResult<Self> {
        self.join_param("segment", segment)
    }

    /// Append `value` as the segment for the parameter `name`.
    pub(crate) fn join_param(mut self, name: &str, value: &str) -> EndpointResult<Self> {
        let encoded = encode_segment(name, value)?;
        if !self.0.ends_with('/') {
            self.0.push('/');
        }
        self.0.push_str(&encoded);
        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ResolvedPath> for String {
    fn from(path: ResolvedPath) -> Self {
        path.0
    }
}

impl PartialEq<&str> for ResolvedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Percent-encode a value so it occupies exactly one path segment.
///
/// `.` and `..` survive encoding and are dot segments to URL parsers even as
/// `%2E`, so they are rejected along with the empty value.
pub(crate) fn encode_segment<'a>(name: &str, value: &'a str) -> EndpointResult<Cow<'a, str>> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(EndpointError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(urlencoding::encode(value))
}
