use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::capacity::Capacity;
use crate::config::Augmentation;
use crate::graph::{FlowGraph, Link};

/// Visited flags and predecessor links of one breadth-first search.
///
/// A fresh value is produced by every [`search`], so nothing carries over between augmentations.
#[derive(Clone, Debug)]
pub struct Traversal {
    start: usize,
    end: usize,
    visited: Vec<bool>,
    predecessor: Vec<Option<(usize, Link)>>,
}

impl Traversal {
    fn new(vertex_count: usize, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            visited: vec![false; vertex_count],
            predecessor: vec![None; vertex_count],
        }
    }

    pub fn is_visited(&self, v: usize) -> bool {
        self.visited[v]
    }

    /// The vertex `v` was discovered from.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.predecessor[v].map(|(u, _)| u)
    }

    pub fn reached(&self) -> bool {
        self.visited[self.end]
    }

    /// The links of the discovered path in order from start to end.
    pub fn path(&self) -> Option<Vec<Link>> {
        if !self.reached() {
            return None;
        }

        let mut links = Vec::new();
        let mut v = self.end;
        while v != self.start {
            let (u, link) = self.predecessor[v]?;
            links.push(link);
            v = u;
        }
        links.reverse();
        Some(links)
    }
}

/// Breadth-first search from `start` over links with positive residual capacity.
///
/// Reverse links are only followed if `augmentation` allows them. Vertices are discovered in
/// adjacency order, so the path found is the fewest-edges one and ties go to the earliest edge.
pub fn search<C: Capacity>(
    graph: &FlowGraph<C>,
    start: usize,
    end: usize,
    augmentation: Augmentation,
) -> Traversal {
    let mut traversal = Traversal::new(graph.vertex_count(), start, end);
    let mut queue = VecDeque::new();
    traversal.visited[start] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        if u == end {
            break;
        }

        for &link in graph.vertex(u).links() {
            if link.is_reverse() && !augmentation.allows_reverse() {
                continue;
            }

            let v = graph.head(link);
            if !traversal.visited[v] && graph.residual(link) > C::zero() {
                traversal.visited[v] = true;
                traversal.predecessor[v] = Some((u, link));
                queue.push_back(v);
            }
        }
    }

    traversal
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 -> 3 and 0 -> 2 -> 3, plus a long detour 0 -> 4 -> 5 -> 3
    fn graph() -> FlowGraph<u32> {
        let mut g = FlowGraph::new(6);
        g.add_edge(0, 4, 1);
        g.add_edge(4, 5, 1);
        g.add_edge(5, 3, 1);
        g.add_edge(0, 1, 3);
        g.add_edge(1, 3, 3);
        g.add_edge(0, 2, 2);
        g.add_edge(2, 3, 2);
        g
    }

    fn heads(g: &FlowGraph<u32>, path: &[Link]) -> Vec<usize> {
        path.iter().map(|&l| g.head(l)).collect()
    }

    #[test]
    fn finds_fewest_edges_path() {
        let g = graph();
        let t = search(&g, 0, 3, Augmentation::Cancelling);
        assert!(t.reached());
        assert_eq!(heads(&g, &t.path().unwrap()), [1, 3]);
        assert_eq!(t.predecessor(3), Some(1));
        assert_eq!(t.predecessor(0), None);
    }

    #[test]
    fn skips_saturated_edges() {
        let mut g = graph();
        let l01 = g.vertex(0).links()[1];
        let l02 = g.vertex(0).links()[2];
        g.push(l01, 3);
        g.push(l02, 2);

        let t = search(&g, 0, 3, Augmentation::Cancelling);
        assert_eq!(heads(&g, &t.path().unwrap()), [4, 5, 3]);
        assert!(!t.is_visited(1));
    }

    #[test]
    fn unreachable_end() {
        let g = graph();
        let t = search(&g, 3, 0, Augmentation::ForwardOnly);
        assert!(!t.reached());
        assert!(t.path().is_none());
    }

    #[test]
    fn reverse_links_depend_on_augmentation() {
        let mut g = FlowGraph::<u32>::new(3);
        let e = g.add_edge(0, 1, 2);
        g.add_edge(2, 1, 2);
        let l01 = g.vertex(0).links()[0];
        assert_eq!(l01.edge(), e);
        g.push(l01, 2);

        // 2 -> 1 -> 0 needs the reverse link of 0 -> 1
        assert!(search(&g, 2, 0, Augmentation::Cancelling).reached());
        assert!(!search(&g, 2, 0, Augmentation::ForwardOnly).reached());
    }

    #[test]
    fn start_equals_end_is_an_empty_path() {
        let g = graph();
        let t = search(&g, 2, 2, Augmentation::Cancelling);
        assert_eq!(t.path(), Some(Vec::new()));
    }
}
