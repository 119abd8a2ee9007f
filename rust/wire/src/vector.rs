// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed-arity tuple and scalar-list parsing.
//!
//! The remote service encodes vectors as comma-separated floats, optionally
//! wrapped in brackets (`"(1.0,2.0,3.0)"`). Absent transform fields arrive
//! as empty strings and decode to documented defaults rather than failing.

use nalgebra::{Quaternion, Vector2, Vector3};

use crate::error::FormatError;

/// Strip one optional pair of enclosing brackets.
fn strip_brackets(s: &str) -> &str {
    let s = s.trim();
    for (open, close) in [('(', ')'), ('[', ']')] {
        if let Some(inner) = s
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner;
        }
    }
    s
}

/// Parse a single float component, locale-invariant.
fn parse_component(token: &str, input: &str) -> Result<f32, FormatError> {
    let token = token.trim();
    fast_float::parse::<f32, _>(token).map_err(|_| FormatError::Number {
        token: token.to_string(),
        input: input.to_string(),
    })
}

/// Parse exactly `N` comma-separated floats, after bracket stripping.
fn parse_tuple<const N: usize>(input: &str) -> Result<[f32; N], FormatError> {
    let tokens: Vec<&str> = strip_brackets(input).split(',').collect();
    if tokens.len() != N {
        return Err(FormatError::Arity {
            expected: N,
            found: tokens.len(),
            input: input.to_string(),
        });
    }

    let mut out = [0.0f32; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = parse_component(token, input)?;
    }
    Ok(out)
}

/// Parse an `"x,y,z"` string into a vector.
///
/// An empty (or all-whitespace) string yields the zero vector; this is the
/// wire convention for an absent position.
pub fn parse_vec3(s: &str) -> Result<Vector3<f32>, FormatError> {
    if s.trim().is_empty() {
        return Ok(Vector3::zeros());
    }
    let [x, y, z] = parse_tuple::<3>(s)?;
    Ok(Vector3::new(x, y, z))
}

/// Parse an `"x,y,z,w"` string into a quaternion.
///
/// An empty string yields the identity quaternion. No normalization is
/// applied; component values pass through exactly as sent.
pub fn parse_quat(s: &str) -> Result<Quaternion<f32>, FormatError> {
    if s.trim().is_empty() {
        return Ok(Quaternion::identity());
    }
    let [x, y, z, w] = parse_tuple::<4>(s)?;
    Ok(Quaternion::new(w, x, y, z))
}

/// Parse a `;`-separated list of `"x,y,z"` triples.
///
/// An empty outer string yields an empty list. Every element must be a
/// complete triple; a trailing separator is therefore a format error.
pub fn parse_vec3_list(s: &str) -> Result<Vec<Vector3<f32>>, FormatError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(';')
        .map(|element| {
            let [x, y, z] = parse_tuple::<3>(element)?;
            Ok(Vector3::new(x, y, z))
        })
        .collect()
}

/// Parse a flat `"u,v,u,v,..."` scalar list into 2D vectors.
///
/// This is the wire convention for UV buffers, which are not
/// semicolon-grouped like positions and normals. An odd scalar count
/// cannot form pairs and is rejected.
pub fn parse_vec2_flat(s: &str) -> Result<Vec<Vector2<f32>>, FormatError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let scalars: Vec<f32> = trimmed
        .split(',')
        .map(|token| parse_component(token, s))
        .collect::<Result<_, _>>()?;

    if scalars.len() % 2 != 0 {
        return Err(FormatError::UnpairedScalars {
            count: scalars.len(),
            input: s.to_string(),
        });
    }

    Ok(scalars
        .chunks_exact(2)
        .map(|pair| Vector2::new(pair[0], pair[1]))
        .collect())
}

/// Parse a flat `"0,1,2,..."` list of non-negative integers.
///
/// Negative and non-numeric tokens are format errors; an empty string
/// yields an empty list.
pub fn parse_index_list(s: &str) -> Result<Vec<u32>, FormatError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|token| {
            let token = token.trim();
            lexical_core::parse::<u32>(token.as_bytes()).map_err(|_| FormatError::Index {
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vec3_round_trips_components() {
        let v = parse_vec3("1.5,-2.25,3e2").unwrap();
        assert_relative_eq!(v.x, 1.5);
        assert_relative_eq!(v.y, -2.25);
        assert_relative_eq!(v.z, 300.0);
    }

    #[test]
    fn empty_vec3_is_zero() {
        assert_eq!(parse_vec3("").unwrap(), Vector3::zeros());
        assert_eq!(parse_vec3("   ").unwrap(), Vector3::zeros());
    }

    #[test]
    fn vec3_strips_enclosing_brackets() {
        let v = parse_vec3("(1,2,3)").unwrap();
        assert_relative_eq!(v.y, 2.0);
        let v = parse_vec3("[1,2,3]").unwrap();
        assert_relative_eq!(v.z, 3.0);
    }

    #[test]
    fn vec3_rejects_wrong_arity() {
        assert!(matches!(
            parse_vec3("1,2"),
            Err(FormatError::Arity {
                expected: 3,
                found: 2,
                ..
            })
        ));
        assert!(matches!(
            parse_vec3("1,2,3,4"),
            Err(FormatError::Arity {
                expected: 3,
                found: 4,
                ..
            })
        ));
    }

    #[test]
    fn vec3_rejects_non_numeric_component() {
        assert!(matches!(
            parse_vec3("1,two,3"),
            Err(FormatError::Number { .. })
        ));
    }

    #[test]
    fn empty_quat_is_identity() {
        let q = parse_quat("").unwrap();
        assert_relative_eq!(q.w, 1.0);
        assert_relative_eq!(q.i, 0.0);
        assert_relative_eq!(q.j, 0.0);
        assert_relative_eq!(q.k, 0.0);
    }

    #[test]
    fn quat_preserves_xyzw_order() {
        let q = parse_quat("0.1,0.2,0.3,0.9").unwrap();
        assert_relative_eq!(q.i, 0.1);
        assert_relative_eq!(q.j, 0.2);
        assert_relative_eq!(q.k, 0.3);
        assert_relative_eq!(q.w, 0.9);
    }

    #[test]
    fn quat_is_not_normalized() {
        // Non-unit values pass through unchanged.
        let q = parse_quat("0,0,0,2").unwrap();
        assert_relative_eq!(q.w, 2.0);
    }

    #[test]
    fn quat_rejects_wrong_arity() {
        assert!(matches!(
            parse_quat("1,2,3"),
            Err(FormatError::Arity { expected: 4, .. })
        ));
    }

    #[test]
    fn vec3_list_splits_on_semicolons() {
        let list = parse_vec3_list("0,0,0;1,0,0;0,1,0").unwrap();
        assert_eq!(list.len(), 3);
        assert_relative_eq!(list[1].x, 1.0);
        assert_relative_eq!(list[2].y, 1.0);
    }

    #[test]
    fn empty_vec3_list_is_empty_not_error() {
        assert!(parse_vec3_list("").unwrap().is_empty());
    }

    #[test]
    fn vec3_list_rejects_short_element() {
        assert!(parse_vec3_list("0,0,0;1,0").is_err());
    }

    #[test]
    fn vec2_flat_chunks_pairs() {
        let uvs = parse_vec2_flat("0,0,1,0,0.5,1").unwrap();
        assert_eq!(uvs.len(), 3);
        assert_relative_eq!(uvs[2].x, 0.5);
        assert_relative_eq!(uvs[2].y, 1.0);
    }

    #[test]
    fn vec2_flat_rejects_odd_count() {
        assert!(matches!(
            parse_vec2_flat("0,1,2"),
            Err(FormatError::UnpairedScalars { count: 3, .. })
        ));
    }

    #[test]
    fn index_list_parses_and_rejects() {
        assert_eq!(parse_index_list("0,1,2").unwrap(), vec![0, 1, 2]);
        assert!(parse_index_list("").unwrap().is_empty());
        assert!(matches!(
            parse_index_list("0,-1,2"),
            Err(FormatError::Index { .. })
        ));
        assert!(matches!(
            parse_index_list("0,x,2"),
            Err(FormatError::Index { .. })
        ));
    }
}
