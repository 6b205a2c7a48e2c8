//! The board graph: a mutable edge set over a fixed vertex lattice.
//!
//! This container is intentionally dumb. It stores whatever configuration it
//! is asked to store - degree bounds, clue limits, and loop rules all live in
//! `rules::validator`, so every mutation must go through the session, which
//! validates first. Keeping the graph rule-free puts the legality logic in
//! exactly one place.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::geom::{Cell, Dims, Edge, Vertex};

/// Edge set plus a degree view derived from it. All operations are O(1)
/// amortized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardGraph {
    dims: Dims,
    edges: FxHashSet<Edge>,
    degrees: FxHashMap<Vertex, u8>,
}

impl BoardGraph {
    #[must_use]
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            edges: FxHashSet::default(),
            degrees: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Add an edge. Returns false if it was already present.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> bool {
        let edge = Edge::new(u, v);
        if !self.edges.insert(edge) {
            return false;
        }
        *self.degrees.entry(u).or_insert(0) += 1;
        *self.degrees.entry(v).or_insert(0) += 1;
        true
    }

    /// Remove an edge. Returns false if it was already absent.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> bool {
        let edge = Edge::new(u, v);
        if !self.edges.remove(&edge) {
            return false;
        }
        for vertex in [u, v] {
            if let Some(d) = self.degrees.get_mut(&vertex) {
                *d -= 1;
                if *d == 0 {
                    self.degrees.remove(&vertex);
                }
            }
        }
        true
    }

    #[must_use]
    pub fn contains(&self, edge: Edge) -> bool {
        self.edges.contains(&edge)
    }

    #[must_use]
    pub fn degree(&self, v: Vertex) -> u8 {
        self.degrees.get(&v).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over present edges. Order is unspecified; callers needing a
    /// deterministic order should walk `dims().all_edges()` and filter.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Neighbors of a vertex along *present* edges, in the fixed grid order
    /// (up, down, left, right) so traversals are deterministic.
    #[must_use]
    pub fn neighbors(&self, v: Vertex) -> SmallVec<[Vertex; 4]> {
        self.dims
            .neighbors_of(v)
            .into_iter()
            .filter(|&n| self.edges.contains(&Edge::new(v, n)))
            .collect()
    }

    /// Vertices with at least one incident edge, in row-major order.
    pub fn active_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.dims.vertices().filter(|v| self.degree(*v) > 0)
    }

    /// Number of this cell's four bounding edges currently present.
    ///
    /// Always recomputed from the edge set - never cached - so clue checks
    /// can't go stale.
    #[must_use]
    pub fn cell_edge_count(&self, cell: Cell) -> u8 {
        cell.bounding_edges()
            .iter()
            .filter(|e| self.edges.contains(e))
            .count() as u8
    }
}
