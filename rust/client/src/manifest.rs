// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Product manifest fetching.

use image::RgbaImage;
use serde::Deserialize;

use crate::client::Client;
use crate::error::{Error, TextureFetchError};

/// One selectable product in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub icon_url: String,
}

/// The top-level product list; insertion order is display order.
pub type ProductManifest = Vec<ProductSummary>;

#[derive(Debug, Deserialize)]
struct ManifestDoc {
    items: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: String,
    icon: String,
    name: String,
}

impl Client {
    /// Fetch and decode the product manifest from `{base_url}/api/list`.
    ///
    /// Transport failures are [`Error::Fetch`]; a body that is not the
    /// expected JSON shape is [`Error::Format`].
    pub async fn fetch_manifest(&self) -> Result<ProductManifest, Error> {
        let url = format!("{}/api/list", self.base_url());
        let body = self.get_text(&url).await?;
        let doc: ManifestDoc = serde_json::from_str(&body)?;

        tracing::info!(products = doc.items.len(), "manifest fetched");
        Ok(doc
            .items
            .into_iter()
            .map(|entry| ProductSummary {
                id: entry.id,
                name: entry.name,
                icon_url: entry.icon,
            })
            .collect())
    }

    /// Fetch and decode a product's icon image.
    pub async fn fetch_icon(&self, icon_url: &str) -> Result<RgbaImage, TextureFetchError> {
        self.fetch_image(icon_url).await
    }
}
