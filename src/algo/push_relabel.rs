use alloc::collections::btree_map::Entry::{Occupied, Vacant};
use alloc::collections::{BTreeMap, VecDeque};
use core::cmp::min;

use petgraph::graph::NodeIndex;
use petgraph::Graph;

use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::error::Error;
use crate::graph::FlowGraph;

type NodeId = NodeIndex<u32>;

struct Label<C> {
    excess: C,
    height: usize,
}

struct State<C> {
    graph: Graph<Label<C>, ()>,
    // Random access to the residual capacity of each ordered pair; parallel edges are merged.
    residual: BTreeMap<(NodeId, NodeId), C>,
    source: NodeId,
    target: NodeId,
    active_queue: VecDeque<NodeId>,
}

fn checked_add<C: Capacity>(a: C, b: C) -> Result<C, Error> {
    a.checked_add(&b).ok_or(Error::ArithmeticOverflow)
}

impl<C: Capacity> State<C> {
    fn new(g: &FlowGraph<C>, source: usize, target: usize) -> Result<Self, Error> {
        let mut graph = Graph::with_capacity(g.vertex_count(), 2 * g.edge_count());
        for _ in 0..g.vertex_count() {
            graph.add_node(Label {
                excess: C::zero(),
                height: 0,
            });
        }

        let mut residual: BTreeMap<(NodeId, NodeId), C> = BTreeMap::new();
        for e in g.edges() {
            let (u, v) = (NodeIndex::new(e.from()), NodeIndex::new(e.to()));
            match residual.entry((u, v)) {
                Vacant(entry) => {
                    entry.insert(e.capacity());
                    graph.add_edge(u, v, ());
                }
                Occupied(mut entry) => {
                    let merged = checked_add(*entry.get(), e.capacity())?;
                    *entry.get_mut() = merged;
                }
            }
        }

        // The algorithm requires that every edge has its reversal present.
        for e in g.edges() {
            let (u, v) = (NodeIndex::new(e.from()), NodeIndex::new(e.to()));
            if let Vacant(entry) = residual.entry((v, u)) {
                entry.insert(C::zero());
                graph.add_edge(v, u, ());
            }
        }

        let source = NodeIndex::new(source);
        let target = NodeIndex::new(target);
        graph[source].height = graph.node_count();

        let mut state = State {
            graph,
            residual,
            source,
            target,
            active_queue: VecDeque::new(),
        };

        // saturate every edge leaving the source
        let mut nbrs = state.graph.neighbors(source).detach();
        while let Some(v) = nbrs.next_node(&state.graph) {
            let cap = state.residual[&(source, v)];
            if cap > C::zero() {
                state.move_flow(source, v, cap)?;
            }
        }

        Ok(state)
    }

    fn move_flow(&mut self, u: NodeId, v: NodeId, amount: C) -> Result<(), Error> {
        if let Some(r) = self.residual.get_mut(&(u, v)) {
            *r -= amount;
        }
        if let Some(r) = self.residual.get_mut(&(v, u)) {
            *r = checked_add(*r, amount)?;
        }
        if u != self.source {
            self.graph[u].excess -= amount;
        }
        self.add_excess(v, amount)
    }

    fn add_excess(&mut self, v: NodeId, amount: C) -> Result<(), Error> {
        // The source never holds excess; it can absorb whatever is pushed back.
        if v == self.source {
            return Ok(());
        }

        let node = &mut self.graph[v];
        if node.excess == C::zero() && v != self.target {
            // We weren't active before, but we are now.
            self.active_queue.push_back(v);
        }
        node.excess = checked_add(node.excess, amount)?;
        Ok(())
    }

    fn residual(&self, u: NodeId, v: NodeId) -> C {
        self.residual.get(&(u, v)).copied().unwrap_or_else(C::zero)
    }

    fn can_push(&self, u: NodeId, v: NodeId) -> bool {
        self.residual(u, v) > C::zero() && self.graph[u].height == self.graph[v].height + 1
    }

    fn push(&mut self, u: NodeId, v: NodeId) -> Result<(), Error> {
        debug_assert!(self.graph[u].excess > C::zero());
        let amount = min(self.graph[u].excess, self.residual(u, v));
        self.move_flow(u, v, amount)
    }

    // Keep pushing excess flow to neighbors until we can't any more.
    fn discharge(&mut self, u: NodeId) -> Result<(), Error> {
        let mut nbrs = self.graph.neighbors(u).detach();
        while self.graph[u].excess > C::zero() {
            if let Some(v) = nbrs.next_node(&self.graph) {
                if self.can_push(u, v) {
                    self.push(u, v)?;
                }
            } else {
                if !self.relabel(u) {
                    break;
                }
                nbrs = self.graph.neighbors(u).detach();
            }
        }
        Ok(())
    }

    /// Lifts `u` just above its lowest residual neighbor; false if it has none.
    fn relabel(&mut self, u: NodeId) -> bool {
        let lowest = self
            .graph
            .neighbors(u)
            .filter(|&v| self.residual(u, v) > C::zero())
            .map(|v| self.graph[v].height)
            .min();
        match lowest {
            Some(height) => {
                self.graph[u].height = height + 1;
                true
            }
            None => false,
        }
    }

    fn run(&mut self) -> Result<(), Error> {
        while let Some(u) = self.active_queue.pop_front() {
            self.discharge(u)?;
        }
        Ok(())
    }

    /// Net flow carried from `u` to `v`, given the original capacity of that pair.
    fn net_flow(&self, u: NodeId, v: NodeId, capacity: C) -> C {
        let r = self.residual(u, v);
        if capacity > r {
            capacity - r
        } else {
            C::zero()
        }
    }
}

/// Goldberg-Tarjan push-relabel with FIFO selection of active vertices.
///
/// Works on any flow network, independently of the augmenting-path machinery, which makes it a
/// useful cross-check for [`EdmondsKarp`](crate::algo::edmonds_karp::EdmondsKarp).
#[derive(Clone, Copy, Debug, Default)]
pub struct PushRelabel;

impl MaxFlow for PushRelabel {
    fn name(&self) -> &'static str {
        "push-relabel"
    }

    fn max_flow<C: Capacity>(
        &mut self,
        graph: &mut FlowGraph<C>,
        source: usize,
        sink: usize,
    ) -> Result<C, Error> {
        if source == sink {
            return Ok(C::zero());
        }

        let mut state = State::new(graph, source, sink)?;
        state.run()?;
        let total_flow = state.graph[state.target].excess;

        // Write the net flow of every pair back, filling parallel edges in insertion order.
        let mut capacities: BTreeMap<(usize, usize), C> = BTreeMap::new();
        for e in graph.edges() {
            let cap = capacities.entry((e.from(), e.to())).or_default();
            *cap = checked_add(*cap, e.capacity())?;
        }
        let mut remaining: BTreeMap<_, _> = capacities
            .into_iter()
            .map(|((u, v), cap)| {
                let flow = state.net_flow(NodeIndex::new(u), NodeIndex::new(v), cap);
                ((u, v), flow)
            })
            .collect();

        for id in 0..graph.edge_count() {
            let e = graph.edge(id);
            let left = remaining.entry((e.from(), e.to())).or_default();
            let flow = min(*left, e.capacity());
            *left -= flow;
            graph.set_flow(id, flow);
        }

        log::info!("{}: max flow = {total_flow}", self.name());
        Ok(total_flow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::edmonds_karp::EdmondsKarp;

    #[test]
    fn classic_network() {
        let mut g = FlowGraph::<i32>::new(6);
        for (u, v, c) in [
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (2, 4, 14),
            (3, 2, 9),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ] {
            g.add_edge(u, v, c);
        }

        assert_eq!(PushRelabel.max_flow(&mut g, 0, 5), Ok(23));
        assert!(g.is_conserved(0, 5));
        assert_eq!(g.outflow(0), 23);
        assert_eq!(g.inflow(5), 23);
    }

    #[test]
    fn parallel_and_antiparallel_edges() {
        let mut g = FlowGraph::<u64>::new(3);
        g.add_edge(0, 1, 2);
        g.add_edge(0, 1, 3);
        g.add_edge(1, 0, 4);
        g.add_edge(1, 2, 4);

        assert_eq!(PushRelabel.max_flow(&mut g, 0, 2), Ok(4));
        assert_eq!(g.flow_on(0, 1), 4);
        assert_eq!(g.flow_on(1, 0), 0);
        assert!(g.is_conserved(0, 2));
        assert!(g.edges().all(|e| e.flow() <= e.capacity()));

        let mut h = FlowGraph::<u64>::new(3);
        h.add_edge(0, 1, 2);
        h.add_edge(0, 1, 3);
        h.add_edge(1, 0, 4);
        h.add_edge(1, 2, 4);
        assert_eq!(EdmondsKarp::default().max_flow(&mut h, 0, 2), Ok(4));
    }

    #[test]
    fn excess_that_cannot_reach_the_sink_returns_to_the_source() {
        let mut g = FlowGraph::<u32>::new(4);
        g.add_edge(0, 1, 10);
        g.add_edge(1, 2, 3);
        g.add_edge(1, 3, 1);

        assert_eq!(PushRelabel.max_flow(&mut g, 0, 2), Ok(3));
        assert_eq!(g.flow_on(0, 1), 3);
        assert_eq!(g.flow_on(1, 3), 0);
    }

    #[test]
    fn merged_parallel_capacity_overflow_is_reported() {
        let mut g = FlowGraph::<i32>::new(3);
        g.add_edge(0, 1, i32::MAX);
        g.add_edge(0, 1, i32::MAX);
        g.add_edge(1, 2, 1);

        assert_eq!(PushRelabel.max_flow(&mut g, 0, 2), Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn reverse_residual_overflow_is_reported() {
        let mut g = FlowGraph::<u32>::new(3);
        g.add_edge(0, 1, u32::MAX);
        g.add_edge(1, 0, 1);
        g.add_edge(1, 2, u32::MAX);

        // saturating 0 -> 1 raises the residual of 1 -> 0 past the type's range
        assert_eq!(PushRelabel.max_flow(&mut g, 0, 2), Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn capacities_at_the_type_limit_still_solve() {
        let mut g = FlowGraph::<i32>::new(3);
        g.add_edge(0, 1, i32::MAX);
        g.add_edge(1, 2, i32::MAX);

        assert_eq!(PushRelabel.max_flow(&mut g, 0, 2), Ok(i32::MAX));
        assert_eq!(g.flow_on(1, 2), i32::MAX);
    }
}
