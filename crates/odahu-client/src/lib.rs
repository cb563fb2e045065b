//! Absolute endpoint URLs for odahu-flow API consumers.
//!
//! [`EndpointClient`] pairs an [`EndpointRegistry`](odahu_core::EndpointRegistry)
//! with a base URL. It does not send requests; an HTTP layer calls
//! [`EndpointClient::url_for`] and issues the request itself.
//!
//! ```
//! use odahu_client::{ClientConfig, EndpointClient};
//! use odahu_core::{EndpointKey, PathParams};
//!
//! let client = EndpointClient::new(&ClientConfig::new().with_base_url("https://odahu.example.com"))?;
//! let url = client.url_for(EndpointKey::UserInfo, &PathParams::new())?;
//! assert_eq!(url.as_str(), "https://odahu.example.com/api/v1/user/info");
//! # Ok::<(), odahu_client::ClientError>(())
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod url;

// ============================================================================
// Public API
// ============================================================================

pub use client::EndpointClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use crate::url::{build_endpoint_url, parse_base_url};
