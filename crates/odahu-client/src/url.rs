//! URL construction helpers.
//!
//! Pure functions that put a resolved endpoint path under a base URL.

use odahu_core::ResolvedPath;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Parse and check a base URL.
pub fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|source| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientError::CannotBeABase(raw.to_string()));
    }
    Ok(url)
}

/// Build an absolute URL for a resolved endpoint path.
///
/// Any path prefix on `base` is kept; its query and fragment are dropped.
pub fn build_endpoint_url(base: &Url, path: &ResolvedPath) -> Url {
    let mut url = base.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}{path}"));
    url.set_query(None);
    url.set_fragment(None);

    url
}
