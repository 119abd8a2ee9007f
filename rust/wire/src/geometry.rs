// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry record decoding and structural validation.

use nalgebra::{Vector2, Vector3};

use crate::error::{Result, ValidationError};
use crate::vector::{parse_index_list, parse_vec2_flat, parse_vec3_list};

/// Raw geometry record as carried in the assembly JSON. Each field is a
/// delimited string in the wire encoding; see the crate docs for the
/// per-field grouping conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GeometryWire {
    pub positions: String,
    pub normals: String,
    pub uvs: String,
    pub indices: String,
}

/// Decoded, validated mesh buffers.
#[derive(Debug, Clone, Default)]
pub struct GeometrySpec {
    /// Vertex positions.
    pub positions: Vec<Vector3<f32>>,
    /// Vertex normals; empty when the wire record carried none.
    pub normals: Vec<Vector3<f32>>,
    /// Texture coordinates; empty when the wire record carried none.
    pub uvs: Vec<Vector2<f32>>,
    /// Triangle indices (each consecutive triple is one triangle).
    pub indices: Vec<u32>,
}

impl GeometrySpec {
    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }
}

/// Decode a raw geometry record into validated buffers.
///
/// Parse failures surface as [`DecodeError::Format`]; buffers that parse
/// but describe an unusable mesh (index count not a triangle multiple, an
/// index past the vertex count, or attribute buffers whose length disagrees
/// with the position count) surface as [`DecodeError::Validation`]. Empty
/// normal/UV buffers are allowed since the renderer can recompute normals
/// and render untextured.
///
/// [`DecodeError::Format`]: crate::error::DecodeError::Format
/// [`DecodeError::Validation`]: crate::error::DecodeError::Validation
pub fn decode_geometry(wire: &GeometryWire) -> Result<GeometrySpec> {
    let spec = GeometrySpec {
        positions: parse_vec3_list(&wire.positions)?,
        normals: parse_vec3_list(&wire.normals)?,
        uvs: parse_vec2_flat(&wire.uvs)?,
        indices: parse_index_list(&wire.indices)?,
    };
    validate(&spec)?;
    Ok(spec)
}

/// Check every structural invariant; the first violation is reported.
fn validate(spec: &GeometrySpec) -> std::result::Result<(), ValidationError> {
    if spec.indices.len() % 3 != 0 {
        return Err(ValidationError::IndexCount {
            count: spec.indices.len(),
        });
    }

    let vertex_count = spec.positions.len();
    if let Some(&index) = spec.indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(ValidationError::IndexOutOfBounds {
            index,
            vertex_count,
        });
    }

    if !spec.normals.is_empty() && spec.normals.len() != vertex_count {
        return Err(ValidationError::BufferMismatch {
            buffer: "normal",
            actual: spec.normals.len(),
            expected: vertex_count,
        });
    }
    if !spec.uvs.is_empty() && spec.uvs.len() != vertex_count {
        return Err(ValidationError::BufferMismatch {
            buffer: "uv",
            actual: spec.uvs.len(),
            expected: vertex_count,
        });
    }

    Ok(())
}
