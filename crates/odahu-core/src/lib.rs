//! Core types for the odahu-flow SDK.
//!
//! - [`endpoints`]: the versioned endpoint registry and path resolver
//! - [`settings`]: SDK settings, their sources and validation
//!
//! Nothing here performs I/O beyond reading environment variables; HTTP
//! transport lives with the consumer.

#![deny(unused_crate_dependencies)]

pub mod endpoints;
pub mod settings;

// Re-export commonly used types for convenience
pub use endpoints::{
    API_VERSION, ApiVersion, EndpointError, EndpointKey, EndpointRegistry, EndpointResult,
    ParamPolicy, PathParams, PathTemplate, ResolvedPath, TemplateSegment,
};
pub use settings::{
    DEFAULT_API_URL, ProcessEnv, SdkSettings, SettingsError, SettingsSource, SettingsUpdate,
    validate_settings,
};
