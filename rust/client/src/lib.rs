// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Showroom Client
//!
//! Async client for the remote product service. Fetches the product
//! manifest and per-product assemblies, decodes the wire-format geometry
//! via [`showroom_wire`], resolves materials (texture + color), and fans
//! the per-part work out over independent tasks.
//!
//! ## Endpoints
//!
//! - `GET {base_url}/api/list` - product manifest
//! - `GET {base_url}/api/getObject?id={product_id}` - assembly for one product
//! - `GET {icon_url}` / `GET {texture_url}` - raw image bytes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use showroom_client::{Client, ClientConfig, PartEvent};
//!
//! let client = Client::new(&ClientConfig::from_env());
//! let manifest = client.fetch_manifest().await?;
//!
//! let assembly = client.fetch_assembly(&manifest[0].id).await?;
//! let mut session = client.start_assembly(assembly);
//! while let Some(event) = session.next_part().await {
//!     match event {
//!         PartEvent::Ready(part) => renderer.add_part(part),
//!         PartEvent::Failed { index, error } => tracing::error!(index, %error, "part lost"),
//!     }
//! }
//! ```
//!
//! Parts complete independently: a failed geometry decode or a dead
//! texture URL on one part never blocks or aborts its siblings. Selecting
//! a new product is just dropping the old session and starting another.

pub mod assembly;
pub mod client;
pub mod config;
pub mod error;
pub mod manifest;
pub mod material;
pub mod session;

pub use assembly::{Assembly, PartWire};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{
    ColorParseError, Error, FetchError, MaterialError, PartError, TextureFetchError,
};
pub use manifest::{ProductManifest, ProductSummary};
pub use material::{parse_hex_color, ColorRgba, ResolvedMaterial};
pub use session::{AssemblySession, PartEvent, ReadyPart};
