//! Engine-agnostic geometry produced by turtle interpretation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Index of a vertex in a [`PolygonSet`]'s vertex buffer.
pub type VertexId = u32;

/// A forest of connected line strips sharing one vertex buffer.
///
/// Each polygon is an ordered list of vertex indices describing one continuous
/// strip — the trunk or a single branch of the tree. Branch polygons start at
/// their attachment vertex on the parent strip, so rendering the set as plain
/// line strips yields a connected figure. Vertices are 3D with z fixed at 0,
/// ready for ingestion by a renderer without a lift step.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PolygonSet {
    /// All emitted vertices, in insertion order.
    pub vertices: Vec<Vec3>,

    /// All finalized polygons, each a list of indices into `vertices`.
    pub polygons: Vec<Vec<VertexId>>,
}

impl PolygonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, point: Vec3) -> VertexId {
        let id = self.vertices.len() as VertexId;
        self.vertices.push(point);
        id
    }

    /// Appends a finalized polygon.
    pub fn add_polygon(&mut self, polygon: Vec<VertexId>) {
        self.polygons.push(polygon);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }
}
