//! Iterative traversal over present edges.
//!
//! All reachability questions the rules need - "are these two vertices
//! connected?", "how many loop fragments exist?", "which path ends are
//! open?" - are answered here with an explicit-queue BFS. No recursion, so
//! traversal depth is bounded by the visited set regardless of grid size,
//! and visit order is deterministic (neighbors in fixed grid order, start
//! vertices in row-major order).

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use super::board::BoardGraph;
use super::geom::Vertex;

/// All vertices reachable from `start` along present edges, including
/// `start` itself.
#[must_use]
pub fn component_of(board: &BoardGraph, start: Vertex) -> FxHashSet<Vertex> {
    let mut visited = FxHashSet::default();
    visited.insert(start);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        for v in board.neighbors(u) {
            if visited.insert(v) {
                queue.push_back(v);
            }
        }
    }
    visited
}

/// Whether a path of present edges joins `u` and `v`.
#[must_use]
pub fn connected(board: &BoardGraph, u: Vertex, v: Vertex) -> bool {
    if u == v {
        return true;
    }
    // Cheap rejections before the sweep.
    if board.degree(u) == 0 || board.degree(v) == 0 {
        return false;
    }
    component_of(board, u).contains(&v)
}

/// Number of connected components among vertices with at least one edge.
#[must_use]
pub fn count_components(board: &BoardGraph) -> usize {
    let mut visited: FxHashSet<Vertex> = FxHashSet::default();
    let mut count = 0;

    for v in board.active_vertices() {
        if !visited.contains(&v) {
            visited.extend(component_of(board, v));
            count += 1;
        }
    }
    count
}

/// Vertices of degree exactly 1 (open path endpoints), in row-major order.
#[must_use]
pub fn loose_ends(board: &BoardGraph) -> Vec<Vertex> {
    board
        .dims()
        .vertices()
        .filter(|&v| board.degree(v) == 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geom::Dims;

    fn path_board() -> BoardGraph {
        // (0,0)-(0,1)-(0,2) plus an isolated edge (2,0)-(2,1)
        let mut b = BoardGraph::new(Dims::new(3, 3));
        b.add_edge(Vertex::new(0, 0), Vertex::new(0, 1));
        b.add_edge(Vertex::new(0, 1), Vertex::new(0, 2));
        b.add_edge(Vertex::new(2, 0), Vertex::new(2, 1));
        b
    }

    #[test]
    fn test_component_of() {
        let b = path_board();
        let comp = component_of(&b, Vertex::new(0, 0));
        assert_eq!(comp.len(), 3);
        assert!(comp.contains(&Vertex::new(0, 2)));
        assert!(!comp.contains(&Vertex::new(2, 0)));
    }

    #[test]
    fn test_connected() {
        let b = path_board();
        assert!(connected(&b, Vertex::new(0, 0), Vertex::new(0, 2)));
        assert!(!connected(&b, Vertex::new(0, 0), Vertex::new(2, 0)));
        // isolated vertex short-circuits
        assert!(!connected(&b, Vertex::new(0, 0), Vertex::new(3, 3)));
        // a vertex is trivially connected to itself
        assert!(connected(&b, Vertex::new(3, 3), Vertex::new(3, 3)));
    }

    #[test]
    fn test_count_components() {
        let mut b = BoardGraph::new(Dims::new(3, 3));
        assert_eq!(count_components(&b), 0);

        b.add_edge(Vertex::new(0, 0), Vertex::new(0, 1));
        assert_eq!(count_components(&b), 1);

        b.add_edge(Vertex::new(2, 0), Vertex::new(2, 1));
        assert_eq!(count_components(&b), 2);

        // join them
        b.add_edge(Vertex::new(0, 0), Vertex::new(1, 0));
        b.add_edge(Vertex::new(1, 0), Vertex::new(2, 0));
        assert_eq!(count_components(&b), 1);
    }

    #[test]
    fn test_loose_ends() {
        let b = path_board();
        assert_eq!(
            loose_ends(&b),
            vec![
                Vertex::new(0, 0),
                Vertex::new(0, 2),
                Vertex::new(2, 0),
                Vertex::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_closed_loop_has_no_loose_ends() {
        let mut b = BoardGraph::new(Dims::new(2, 2));
        b.add_edge(Vertex::new(0, 0), Vertex::new(0, 1));
        b.add_edge(Vertex::new(0, 1), Vertex::new(1, 1));
        b.add_edge(Vertex::new(1, 1), Vertex::new(1, 0));
        b.add_edge(Vertex::new(1, 0), Vertex::new(0, 0));

        assert!(loose_ends(&b).is_empty());
        assert_eq!(count_components(&b), 1);
    }
}
