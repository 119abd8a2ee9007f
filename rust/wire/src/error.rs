// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for wire-format decoding.

use thiserror::Error;

/// Result type for geometry decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Malformed wire text: wrong arity, non-numeric components, bad index
/// tokens. Carries the offending input for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected {expected} comma-separated components, found {found}: {input:?}")]
    Arity {
        expected: usize,
        found: usize,
        input: String,
    },

    #[error("invalid numeric component {token:?} in {input:?}")]
    Number { token: String, input: String },

    #[error("invalid index token {token:?}")]
    Index { token: String },

    #[error("scalar count {count} does not split into 2-component pairs: {input:?}")]
    UnpairedScalars { count: usize, input: String },
}

/// Well-formed text that decodes to structurally invalid buffers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("index count {count} is not a multiple of 3")]
    IndexCount { count: usize },

    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    #[error("{buffer} count {actual} does not match position count {expected}")]
    BufferMismatch {
        buffer: &'static str,
        actual: usize,
        expected: usize,
    },
}

/// Errors that can occur while decoding a geometry record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
