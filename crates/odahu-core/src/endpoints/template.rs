//! Path template parsing.
//!
//! Templates are split once into literal text and `{name}` placeholders, so
//! resolution is a single pass over the segments.

use std::fmt;

use super::{EndpointError, EndpointResult};

/// Placeholder substituted with the registry's API version.
pub const VERSION_PLACEHOLDER: &str = "version";

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Text copied verbatim, e.g. `/api/` in `/api/{version}`
    Literal(String),
    /// Placeholder name, e.g. `id` in `/deployment/{id}`
    Placeholder(String),
}

/// A parsed path template such as `/api/{version}/model/deployment/{id}/default-route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<TemplateSegment>,
}

impl PathTemplate {
    /// Parse a raw template.
    ///
    /// Rejects stray or nested braces, unterminated and empty placeholders,
    /// and placeholders that appear twice.
    pub fn parse(raw: impl Into<String>) -> EndpointResult<Self> {
        let raw = raw.into();
        let malformed = |reason: &str| EndpointError::MalformedTemplate {
            template: raw.clone(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut names: Vec<&str> = Vec::new();
        let mut rest = raw.as_str();

        while !rest.is_empty() {
            let Some(open) = rest.find(['{', '}']) else {
                segments.push(TemplateSegment::Literal(rest.to_string()));
                break;
            };
            if open > 0 {
                segments.push(TemplateSegment::Literal(rest[..open].to_string()));
            }
            if rest[open..].starts_with('}') {
                return Err(malformed("unmatched '}'"));
            }

            let after = &rest[open + 1..];
            let Some(close) = after.find(['{', '}']) else {
                return Err(malformed("unterminated placeholder"));
            };
            if after[close..].starts_with('{') {
                return Err(malformed("nested placeholder"));
            }

            let name = &after[..close];
            if name.is_empty() {
                return Err(malformed("empty placeholder name"));
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(malformed(&format!("invalid placeholder name '{name}'")));
            }
            if names.contains(&name) {
                return Err(malformed(&format!("duplicate placeholder '{name}'")));
            }
            names.push(name);
            segments.push(TemplateSegment::Placeholder(name.to_string()));
            rest = &after[close + 1..];
        }

        Ok(Self { raw, segments })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Placeholder(name) => Some(name.as_str()),
            TemplateSegment::Literal(_) => None,
        })
    }

    /// Placeholders the caller must supply (everything except `version`).
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.placeholders()
            .filter(|name| *name != VERSION_PLACEHOLDER)
    }

    /// Whether `name` appears as a placeholder.
    pub fn references(&self, name: &str) -> bool {
        self.placeholders().any(|placeholder| placeholder == name)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
