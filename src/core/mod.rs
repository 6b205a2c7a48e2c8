//! Core building blocks: grid geometry, the board graph, players, traversal.
//!
//! Everything here is rule-free. Legality and win conditions live in `rules`;
//! this module only knows how the lattice is shaped and what edges are drawn.

pub mod board;
pub mod geom;
pub mod player;
pub mod traverse;

pub use board::BoardGraph;
pub use geom::{Cell, ClueMap, Dims, Edge, EdgeSet, EdgeWeights, Vertex};
pub use player::{PlayerId, PlayerMap};
