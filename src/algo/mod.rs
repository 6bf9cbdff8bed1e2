pub mod bfs;
pub mod edmonds_karp;
pub mod push_relabel;

use crate::capacity::Capacity;
use crate::error::Error;
use crate::graph::FlowGraph;

/// A maximum flow algorithm.
pub trait MaxFlow {
    /// Short human readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Run the algorithm over `graph`, leaving the final flow on its edges, and return the total
    /// flow from `source` to `sink`.
    fn max_flow<C: Capacity>(
        &mut self,
        graph: &mut FlowGraph<C>,
        source: usize,
        sink: usize,
    ) -> Result<C, Error>;
}
