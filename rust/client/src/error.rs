// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for fetching, material resolution, and part processing.
//!
//! The taxonomy keeps "could not reach/read" ([`FetchError`]) separate from
//! "reached but unusable" ([`Error::Format`]), and keeps the two degradable
//! material failures ([`TextureFetchError`], [`ColorParseError`]) out of the
//! fatal paths entirely.

use thiserror::Error;

/// Transport-level failure for a single request. Never retried here;
/// retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },
}

impl FetchError {
    /// Classify a reqwest error for `url`, splitting out timeouts.
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Errors for whole-document operations (manifest and assembly fetches).
/// There is nothing partial to salvage at this level.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed response body: {0}")]
    Format(#[from] serde_json::Error),
}

/// Texture (or icon) fetch/decode failure. Recoverable: material
/// resolution degrades to "no texture" instead of failing the part.
#[derive(Debug, Error)]
pub enum TextureFetchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Unrecognized color literal. Recoverable: the color is cosmetic, so the
/// material simply carries no explicit color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized color literal {0:?}")]
pub struct ColorParseError(pub String);

/// Fatal material resolution failure: the descriptor itself is unusable.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("malformed material descriptor: {0}")]
    Format(#[from] serde_json::Error),
}

/// Per-part failure kind, reported independently for each part.
#[derive(Debug, Error)]
pub enum PartError {
    #[error("transform decode failed: {0}")]
    Transform(#[from] showroom_wire::FormatError),

    #[error("geometry decode failed: {0}")]
    Geometry(#[from] showroom_wire::DecodeError),

    #[error("material resolution failed: {0}")]
    Material(#[from] MaterialError),
}
