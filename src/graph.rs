use alloc::collections::{BTreeMap, VecDeque};
use alloc::vec;
use alloc::vec::Vec;

use crate::capacity::Capacity;
use crate::node::vertex_count;

/// A directed edge `from -> to` with a capacity and the flow currently pushed through it.
///
/// The flow always satisfies `0 <= flow <= capacity`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<C> {
    from: usize,
    to: usize,
    capacity: C,
    flow: C,
}

impl<C: Capacity> Edge<C> {
    fn new(from: usize, to: usize, capacity: C) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: C::zero(),
        }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn capacity(&self) -> C {
        self.capacity
    }

    pub fn flow(&self) -> C {
        self.flow
    }

    /// Capacity minus flow.
    pub fn residual(&self) -> C {
        self.capacity - self.flow
    }
}

/// An entry in a vertex's adjacency list.
///
/// Every edge `u -> v` appears twice: as a forward link in `u`'s list and as a reverse link in
/// `v`'s list. Traversing a reverse link retracts flow from the edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    edge: usize,
    reverse: bool,
}

impl Link {
    pub fn edge(&self) -> usize {
        self.edge
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }
}

#[derive(Clone, Debug, Default)]
pub struct Vertex {
    id: usize,
    links: Vec<Link>,
}

impl Vertex {
    pub fn id(&self) -> usize {
        self.id
    }

    /// Outgoing links in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

/// Arena of vertices addressed by index, owning all edges.
#[derive(Clone, Debug)]
pub struct FlowGraph<C> {
    vertices: Vec<Vertex>,
    edges: Vec<Edge<C>>,
    // first edge inserted for each ordered endpoint pair
    index: BTreeMap<(usize, usize), usize>,
}

impl<C: Capacity> FlowGraph<C> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: (0..vertex_count)
                .map(|id| Vertex {
                    id,
                    links: Vec::new(),
                })
                .collect(),
            edges: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// A graph sized for `n` split data centers plus supersource and supersink.
    pub fn with_data_centers(n: usize) -> Self {
        Self::new(vertex_count(n))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex(&self, id: usize) -> &Vertex {
        &self.vertices[id]
    }

    pub fn edge(&self, id: usize) -> &Edge<C> {
        &self.edges[id]
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<C>> + '_ {
        self.edges.iter()
    }

    /// Appends an edge `u -> v` with zero flow and returns its id.
    ///
    /// Panics if `u` or `v` is not a vertex of this graph.
    pub fn add_edge(&mut self, u: usize, v: usize, capacity: C) -> usize {
        assert!(
            u < self.vertices.len() && v < self.vertices.len(),
            "edge ({u}, {v}) out of bounds for {} vertices",
            self.vertices.len()
        );
        debug_assert!(!capacity.is_negative());

        let id = self.edges.len();
        self.edges.push(Edge::new(u, v, capacity));
        self.vertices[u].links.push(Link {
            edge: id,
            reverse: false,
        });
        self.vertices[v].links.push(Link {
            edge: id,
            reverse: true,
        });
        self.index.entry((u, v)).or_insert(id);
        id
    }

    /// The first edge added from `u` to `v`.
    pub fn find_edge(&self, u: usize, v: usize) -> Option<&Edge<C>> {
        self.index.get(&(u, v)).map(|&id| &self.edges[id])
    }

    /// The vertex a link leads to.
    pub fn head(&self, link: Link) -> usize {
        let edge = &self.edges[link.edge];
        if link.reverse {
            edge.from
        } else {
            edge.to
        }
    }

    /// How much flow can still be sent along `link`.
    pub fn residual(&self, link: Link) -> C {
        let edge = &self.edges[link.edge];
        if link.reverse {
            edge.flow
        } else {
            edge.residual()
        }
    }

    /// Sends `amount` along `link`, which must not exceed [`FlowGraph::residual`].
    pub fn push(&mut self, link: Link, amount: C) {
        debug_assert!(amount <= self.residual(link));
        let edge = &mut self.edges[link.edge];
        if link.reverse {
            edge.flow -= amount;
        } else {
            edge.flow += amount;
        }
    }

    pub(crate) fn set_flow(&mut self, edge: usize, flow: C) {
        debug_assert!(flow <= self.edges[edge].capacity);
        self.edges[edge].flow = flow;
    }

    /// Total flow over all edges from `u` to `v`.
    pub fn flow_on(&self, u: usize, v: usize) -> C {
        self.edges
            .iter()
            .filter(|e| e.from == u && e.to == v)
            .map(Edge::flow)
            .sum()
    }

    pub fn inflow(&self, v: usize) -> C {
        self.edges.iter().filter(|e| e.to == v).map(Edge::flow).sum()
    }

    pub fn outflow(&self, v: usize) -> C {
        self.edges.iter().filter(|e| e.from == v).map(Edge::flow).sum()
    }

    /// Whether inflow equals outflow at every vertex other than `source` and `sink`.
    pub fn is_conserved(&self, source: usize, sink: usize) -> bool {
        let mut inflow = vec![C::zero(); self.vertices.len()];
        let mut outflow = vec![C::zero(); self.vertices.len()];
        for e in &self.edges {
            inflow[e.to] += e.flow;
            outflow[e.from] += e.flow;
        }
        (0..self.vertices.len())
            .filter(|&v| v != source && v != sink)
            .all(|v| inflow[v] == outflow[v])
    }

    /// Vertices reachable from `source` through links with positive residual capacity.
    ///
    /// Once the flow is maximal this is the source side of a minimum cut.
    pub fn source_side(&self, source: usize) -> Vec<bool> {
        let mut side = vec![false; self.vertices.len()];
        let mut queue = VecDeque::from([source]);
        side[source] = true;
        while let Some(u) = queue.pop_front() {
            for &link in &self.vertices[u].links {
                let v = self.head(link);
                if !side[v] && self.residual(link) > C::zero() {
                    side[v] = true;
                    queue.push_back(v);
                }
            }
        }
        side
    }

    /// Sum of the capacities of edges leaving the vertex set `side`.
    pub fn cut_capacity(&self, side: &[bool]) -> C {
        self.edges
            .iter()
            .filter(|e| side[e.from] && !side[e.to])
            .map(Edge::capacity)
            .sum()
    }

    /// Clears the flow on every edge.
    pub fn reset_flow(&mut self) {
        self.edges.iter_mut().for_each(|e| e.flow.set_zero());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> FlowGraph<u32> {
        let mut g = FlowGraph::new(4);
        g.add_edge(0, 1, 3);
        g.add_edge(0, 2, 2);
        g.add_edge(1, 3, 3);
        g.add_edge(2, 3, 2);
        g
    }

    #[test]
    fn add_edge_links_both_endpoints() {
        let g = diamond();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);

        let forward: Vec<_> = g.vertex(0).links().iter().map(|&l| g.head(l)).collect();
        assert_eq!(forward, [1, 2]);
        // vertex 3 only has reverse links back to its predecessors
        assert!(g.vertex(3).links().iter().all(Link::is_reverse));
    }

    #[test]
    fn find_edge_returns_first_match() {
        let mut g = diamond();
        g.add_edge(0, 1, 10);
        assert_eq!(g.find_edge(0, 1).unwrap().capacity(), 3);
        assert!(g.find_edge(1, 0).is_none());
        assert!(g.find_edge(3, 0).is_none());
    }

    #[test]
    fn push_and_retract_keep_flow_in_bounds() {
        let mut g = diamond();
        let forward = g.vertex(0).links()[0];
        assert_eq!(g.residual(forward), 3);

        g.push(forward, 2);
        assert_eq!(g.edge(0).flow(), 2);
        assert_eq!(g.residual(forward), 1);

        let reverse = g.vertex(1).links()[0];
        assert!(reverse.is_reverse());
        assert_eq!(g.head(reverse), 0);
        assert_eq!(g.residual(reverse), 2);

        g.push(reverse, 2);
        assert_eq!(g.edge(0).flow(), 0);
        assert_eq!(g.residual(reverse), 0);
    }

    #[test]
    fn conservation_and_cut() {
        let mut g = diamond();
        let l01 = g.vertex(0).links()[0];
        let l13 = g.vertex(1).links()[1];
        g.push(l01, 3);
        assert!(!g.is_conserved(0, 3));
        g.push(l13, 3);
        assert!(g.is_conserved(0, 3));
        assert_eq!(g.outflow(0), 3);
        assert_eq!(g.inflow(3), 3);
        assert_eq!(g.flow_on(0, 1), 3);

        // 3 reaches 1 back through the saturated edge 1 -> 3
        let side = g.source_side(0);
        assert_eq!(side, [true, true, true, true]);

        g.reset_flow();
        assert!(g.edges().all(|e| e.flow() == 0));
        assert_eq!(g.cut_capacity(&[true, false, false, false]), 5);
    }

    #[test]
    #[should_panic]
    fn add_edge_out_of_bounds_panics() {
        let mut g = FlowGraph::<u32>::new(2);
        g.add_edge(0, 2, 1);
    }
}
