//! Versioned endpoint registry.
//!
//! The registry is immutable after construction. Resolution is a pure read,
//! so a single registry can be shared across threads without locking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, trace};

use super::path::encode_segment;
use super::{
    ApiVersion, EndpointError, EndpointKey, EndpointResult, PathParams, PathTemplate,
    ResolvedPath, TemplateSegment, VERSION_PLACEHOLDER,
};

/// How to treat parameters the template does not reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamPolicy {
    /// Skip them (logged at debug level).
    #[default]
    Ignore,
    /// Fail with [`EndpointError::UnusedParameter`].
    Reject,
}

/// Maps endpoint keys to resolved request paths for one API version.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    version: ApiVersion,
    templates: BTreeMap<EndpointKey, PathTemplate>,
    param_policy: ParamPolicy,
}

impl EndpointRegistry {
    /// Create a registry bound to `version`.
    pub fn new(version: impl Into<String>) -> EndpointResult<Self> {
        Self::with_version(ApiVersion::new(version)?)
    }

    /// Create a registry bound to an already validated version.
    pub fn with_version(version: ApiVersion) -> EndpointResult<Self> {
        let templates = builtin_templates()?;

        debug!(
            version = %version,
            endpoints = templates.len(),
            "Built endpoint registry"
        );

        Ok(Self {
            version,
            templates,
            param_policy: ParamPolicy::default(),
        })
    }

    /// Select how unused parameters are handled.
    #[must_use]
    pub const fn with_param_policy(mut self, policy: ParamPolicy) -> Self {
        self.param_policy = policy;
        self
    }

    pub const fn version(&self) -> &ApiVersion {
        &self.version
    }

    pub const fn param_policy(&self) -> ParamPolicy {
        self.param_policy
    }

    /// Parsed template for `key`.
    pub fn template(&self, key: EndpointKey) -> EndpointResult<&PathTemplate> {
        self.templates
            .get(&key)
            .ok_or_else(|| EndpointError::UnknownEndpoint {
                name: key.to_string(),
            })
    }

    /// All registered endpoints in declaration order.
    pub fn endpoints(&self) -> impl Iterator<Item = (EndpointKey, &PathTemplate)> {
        self.templates.iter().map(|(key, template)| (*key, template))
    }

    /// Resolve `key` into a concrete request path.
    ///
    /// `{version}` comes from the registry; every other placeholder must have
    /// an entry in `params`. Values are percent-encoded as a single segment;
    /// empty, `.` and `..` values fail with [`EndpointError::InvalidParameter`].
    pub fn resolve(&self, key: EndpointKey, params: &PathParams) -> EndpointResult<ResolvedPath> {
        let template = self.template(key)?;
        self.check_unused(key, template, params)?;

        let mut path = String::with_capacity(template.as_str().len());
        for segment in template.segments() {
            match segment {
                TemplateSegment::Literal(text) => path.push_str(text),
                TemplateSegment::Placeholder(name) if name == VERSION_PLACEHOLDER => {
                    path.push_str(self.version.as_str());
                }
                TemplateSegment::Placeholder(name) => {
                    let value =
                        params
                            .get(name)
                            .ok_or_else(|| EndpointError::MissingParameter {
                                endpoint: key,
                                name: name.clone(),
                            })?;
                    path.push_str(&encode_segment(name, value)?);
                }
            }
        }

        trace!(endpoint = %key, path = %path, "Resolved endpoint");
        Ok(ResolvedPath::new(path))
    }

    /// Resolve `key` with no parameters.
    pub fn path(&self, key: EndpointKey) -> EndpointResult<ResolvedPath> {
        self.resolve(key, &PathParams::new())
    }

    /// Resolve an endpoint by its kebab-case name.
    pub fn resolve_named(&self, name: &str, params: &PathParams) -> EndpointResult<ResolvedPath> {
        self.resolve(EndpointKey::from_name(name)?, params)
    }

    /// Path of a single item in a collection endpoint: `<collection>/<id>`.
    pub fn resolve_item(&self, key: EndpointKey, id: &str) -> EndpointResult<ResolvedPath> {
        self.path(key)?.join_param("id", id)
    }

    fn check_unused(
        &self,
        key: EndpointKey,
        template: &PathTemplate,
        params: &PathParams,
    ) -> EndpointResult<()> {
        for name in params.names() {
            // version always comes from the registry, never from params
            if name != VERSION_PLACEHOLDER && template.references(name) {
                continue;
            }
            match self.param_policy {
                ParamPolicy::Reject => {
                    return Err(EndpointError::UnusedParameter {
                        endpoint: key,
                        name: name.to_string(),
                    });
                }
                ParamPolicy::Ignore => {
                    debug!(endpoint = %key, param = name, "Ignoring unused path parameter");
                }
            }
        }
        Ok(())
    }
}

impl Default for EndpointRegistry {
    /// Registry bound to [`API_VERSION`](super::API_VERSION).
    fn default() -> Self {
        Self::with_version(ApiVersion::default())
            .expect("built-in endpoint templates are well-formed")
    }
}

/// Parse the template of every [`EndpointKey`].
fn builtin_templates() -> EndpointResult<BTreeMap<EndpointKey, PathTemplate>> {
    EndpointKey::iter()
        .map(|key| PathTemplate::parse(key.template()).map(|template| (key, template)))
        .collect()
}
