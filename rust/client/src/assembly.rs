// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly fetching.

use serde::Deserialize;
use showroom_wire::{GeometryWire, TransformWire};

use crate::client::Client;
use crate::error::Error;

/// One raw part record from the assembly document. Geometry and transform
/// stay in wire form until the orchestrator decodes them per part.
#[derive(Debug, Clone, Deserialize)]
pub struct PartWire {
    pub transform: TransformWire,
    pub mesh: GeometryWire,
    /// Embedded JSON material descriptor, resolved asynchronously later.
    pub material: String,
}

/// The full set of parts for one selected product.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub parts: Vec<PartWire>,
}

impl Assembly {
    /// Number of parts in the assembly.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the assembly has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct AssemblyDoc {
    objects: Vec<PartWire>,
}

impl Client {
    /// Fetch the part list for one product from
    /// `{base_url}/api/getObject?id={product_id}`.
    pub async fn fetch_assembly(&self, product_id: &str) -> Result<Assembly, Error> {
        let url = format!("{}/api/getObject?id={}", self.base_url(), product_id);
        let body = self.get_text(&url).await?;
        let doc: AssemblyDoc = serde_json::from_str(&body)?;

        tracing::info!(product_id, parts = doc.objects.len(), "assembly fetched");
        Ok(Assembly { parts: doc.objects })
    }
}
