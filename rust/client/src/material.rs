// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material descriptor resolution.
//!
//! A material descriptor is an embedded JSON string with an optional
//! texture URL and an optional hex color. Only a malformed descriptor is
//! fatal; a failed texture fetch or an unparsable color degrades to a
//! partial material so the part still renders.

use image::RgbaImage;
use serde::Deserialize;

use crate::client::Client;
use crate::error::{ColorParseError, MaterialError, TextureFetchError};

/// RGBA color, 0-255 per channel.
pub type ColorRgba = [u8; 4];

/// A material after asynchronous resolution; either field may be absent.
#[derive(Debug, Clone, Default)]
pub struct ResolvedMaterial {
    /// Decoded texture pixels, if a texture was declared and fetchable.
    pub texture: Option<RgbaImage>,
    /// Explicit color, if one was declared and parsable.
    pub color: Option<ColorRgba>,
}

#[derive(Debug, Deserialize, Default)]
struct MaterialDoc {
    #[serde(rename = "textureUrl", default)]
    texture_url: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` color literal. Alpha defaults to 255.
pub fn parse_hex_color(s: &str) -> Result<ColorRgba, ColorParseError> {
    let err = || ColorParseError(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
    // Length is checked in bytes, so non-ASCII input must be rejected
    // before slicing digit pairs.
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return Err(err());
    }

    let mut channels = [0u8; 4];
    channels[3] = 255;
    for (i, slot) in channels.iter_mut().enumerate().take(hex.len() / 2) {
        *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| err())?;
    }
    Ok(channels)
}

impl Client {
    /// Resolve a raw material descriptor into a [`ResolvedMaterial`].
    ///
    /// Returns whatever subset of texture and color could be resolved.
    /// Only a descriptor that fails to parse as JSON is an error.
    pub async fn resolve_material(&self, raw: &str) -> Result<ResolvedMaterial, MaterialError> {
        let doc: MaterialDoc = serde_json::from_str(raw)?;
        let mut material = ResolvedMaterial::default();

        if let Some(url) = doc.texture_url.as_deref().filter(|u| !u.is_empty()) {
            match self.fetch_image(url).await {
                Ok(texture) => material.texture = Some(texture),
                Err(err) => {
                    tracing::warn!(url, error = %err, "texture unavailable, continuing without it");
                }
            }
        }

        if let Some(literal) = doc.color.as_deref() {
            match parse_hex_color(literal) {
                Ok(color) => material.color = Some(color),
                Err(err) => {
                    tracing::debug!(error = %err, "ignoring unparsable material color");
                }
            }
        }

        Ok(material)
    }

    /// Fetch `url` and decode the body as an image.
    pub(crate) async fn fetch_image(&self, url: &str) -> Result<RgbaImage, TextureFetchError> {
        let bytes = self.get_bytes(url).await?;
        let image = image::load_from_memory(&bytes)?;
        Ok(image.to_rgba8())
    }
}
