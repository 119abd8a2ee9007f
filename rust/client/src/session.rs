// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-part pipeline orchestration.
//!
//! Each part of an assembly runs its own task: synchronous geometry and
//! transform decoding first, then asynchronous material resolution. Parts
//! fail independently; one part's error never cancels a sibling's in-flight
//! work. Completed parts are delivered in completion order, not launch
//! order.

use showroom_wire::{decode_geometry, decode_transform, GeometrySpec, TransformSpec};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::assembly::{Assembly, PartWire};
use crate::client::Client;
use crate::error::PartError;
use crate::material::ResolvedMaterial;

/// A fully processed part, ready to hand to the renderer. Buffer and
/// texture ownership transfers with the event.
#[derive(Debug)]
pub struct ReadyPart {
    /// Index of the part within its assembly.
    pub index: usize,
    pub geometry: GeometrySpec,
    pub transform: TransformSpec,
    pub material: ResolvedMaterial,
}

/// Outcome of one part pipeline.
#[derive(Debug)]
pub enum PartEvent {
    Ready(ReadyPart),
    Failed { index: usize, error: PartError },
}

/// Handle to the in-flight pipelines of one selected product.
///
/// The caller owns the session; dropping it (or calling
/// [`cancel`](AssemblySession::cancel)) aborts stale pipelines, which is
/// how selecting a new product discards the previous one's work.
#[derive(Debug)]
pub struct AssemblySession {
    events: mpsc::Receiver<PartEvent>,
    tasks: JoinSet<()>,
}

impl AssemblySession {
    /// Wait for the next part outcome, in completion order. Returns `None`
    /// once every part has reported.
    pub async fn next_part(&mut self) -> Option<PartEvent> {
        self.events.recv().await
    }

    /// Abort all in-flight part pipelines. Requests already on the wire
    /// run to completion; their results are discarded.
    pub fn cancel(&mut self) {
        self.tasks.abort_all();
    }
}

impl Drop for AssemblySession {
    fn drop(&mut self) {
        self.tasks.abort_all();
    }
}

impl Client {
    /// Launch one pipeline per part and return the session handle.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_assembly(&self, assembly: Assembly) -> AssemblySession {
        // Capacity covers every outcome, so no pipeline ever blocks on a
        // slow consumer.
        let (tx, events) = mpsc::channel(assembly.len().max(1));
        let mut tasks = JoinSet::new();

        for (index, part) in assembly.parts.into_iter().enumerate() {
            let client = self.clone();
            let tx = tx.clone();
            tasks.spawn(async move {
                let event = client.process_part(index, part).await;
                // The receiver may have been dropped on cancellation.
                let _ = tx.send(event).await;
            });
        }

        AssemblySession { events, tasks }
    }

    /// Run one part through decode and material resolution.
    async fn process_part(&self, index: usize, part: PartWire) -> PartEvent {
        // Decoding is pure; a malformed part fails here without ever
        // touching the network.
        let transform = match decode_transform(&part.transform) {
            Ok(transform) => transform,
            Err(err) => return Self::part_failed(index, err.into()),
        };
        let geometry = match decode_geometry(&part.mesh) {
            Ok(geometry) => geometry,
            Err(err) => return Self::part_failed(index, err.into()),
        };
        tracing::debug!(index, vertices = geometry.vertex_count(), "geometry decoded");

        match self.resolve_material(&part.material).await {
            Ok(material) => PartEvent::Ready(ReadyPart {
                index,
                geometry,
                transform,
                material,
            }),
            Err(err) => Self::part_failed(index, err.into()),
        }
    }

    fn part_failed(index: usize, error: PartError) -> PartEvent {
        tracing::warn!(index, error = %error, "part failed");
        PartEvent::Failed { index, error }
    }
}
