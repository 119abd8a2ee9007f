// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Part transform decoding.

use nalgebra::{Quaternion, Vector3};

use crate::error::FormatError;
use crate::vector::{parse_quat, parse_vec3};

/// Raw transform record as carried in the assembly JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct TransformWire {
    /// `"x,y,z"`; empty means origin.
    pub position: String,
    /// `"x,y,z,w"`; empty means identity.
    pub rotation: String,
}

/// Decoded part transform.
///
/// The rotation is carried exactly as sent; non-unit quaternions are not
/// rejected or normalized here. Callers that require a unit rotation should
/// normalize at the point of use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSpec {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: Quaternion::identity(),
        }
    }
}

/// Decode a raw transform record.
pub fn decode_transform(wire: &TransformWire) -> Result<TransformSpec, FormatError> {
    Ok(TransformSpec {
        position: parse_vec3(&wire.position)?,
        rotation: parse_quat(&wire.rotation)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn decodes_position_and_rotation() {
        let wire = TransformWire {
            position: "1,2,3".into(),
            rotation: "0,0,0,1".into(),
        };
        let spec = decode_transform(&wire).unwrap();
        assert_relative_eq!(spec.position.z, 3.0);
        assert_relative_eq!(spec.rotation.w, 1.0);
    }

    #[test]
    fn absent_fields_decode_to_defaults() {
        let spec = decode_transform(&TransformWire::default()).unwrap();
        assert_eq!(spec, TransformSpec::default());
    }

    #[test]
    fn malformed_rotation_is_rejected() {
        let wire = TransformWire {
            position: "0,0,0".into(),
            rotation: "1,2,3".into(),
        };
        assert!(decode_transform(&wire).is_err());
    }
}
