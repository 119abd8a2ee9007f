// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Showroom Wire Codec
//!
//! Decoder for the delimiter-based textual encoding used by the remote
//! product service. The service ships mesh buffers as strings:
//!
//! - positions / normals: `;`-separated triples — `"x,y,z;x,y,z;..."`
//! - uvs: a flat `,`-separated scalar list — `"u,v,u,v,..."`
//! - indices: a flat `,`-separated integer list — `"0,1,2,..."`
//! - transform fields: single tuples — `"x,y,z"` and `"x,y,z,w"`
//!
//! All parsing is synchronous and pure. Float parsing is locale-invariant
//! via [fast-float](https://docs.rs/fast-float), which matters because `,`
//! doubles as the component delimiter.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use showroom_wire::{decode_geometry, parse_vec3, GeometryWire};
//!
//! let position = parse_vec3("1.5,0,-3.25")?;
//!
//! let wire = GeometryWire {
//!     positions: "0,0,0;1,0,0;0,1,0".into(),
//!     normals: "0,0,1;0,0,1;0,0,1".into(),
//!     uvs: "0,0,1,0,0,1".into(),
//!     indices: "0,1,2".into(),
//! };
//! let spec = decode_geometry(&wire)?;
//! assert_eq!(spec.triangle_count(), 1);
//! ```
//!
//! Parse failures (`FormatError`) are kept distinct from structural
//! validation failures (`ValidationError`) so callers can tell malformed
//! text from well-formed text describing an unusable mesh.
//!
//! ## Feature Flags
//!
//! - `serde`: derive `Deserialize` for the raw wire structs

pub mod error;
pub mod geometry;
pub mod transform;
pub mod vector;

pub use error::{DecodeError, FormatError, Result, ValidationError};
pub use geometry::{decode_geometry, GeometrySpec, GeometryWire};
pub use transform::{decode_transform, TransformSpec, TransformWire};
pub use vector::{parse_index_list, parse_quat, parse_vec2_flat, parse_vec3, parse_vec3_list};
