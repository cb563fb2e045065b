//! Endpoint registry for the odahu-flow REST API.
//!
//! Every platform resource lives under a versioned path template such as
//! `/api/{version}/model/training`. An [`EndpointRegistry`] binds one API
//! version and turns an [`EndpointKey`] plus [`PathParams`] into a
//! [`ResolvedPath`]. Host, scheme and transport belong to the caller.

mod error;
mod key;
mod path;
mod registry;
mod template;
mod version;

pub use error::{EndpointError, EndpointResult};
pub use key::{API_VERSION, EndpointKey};
pub use path::{PathParams, ResolvedPath};
pub use registry::{EndpointRegistry, ParamPolicy};
pub use template::{PathTemplate, TemplateSegment, VERSION_PLACEHOLDER};
pub use version::ApiVersion;
