use crate::algo::bfs::search;
use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::config::{Augmentation, SolverConfig};
use crate::error::Error;
use crate::graph::FlowGraph;

/// Ford-Fulkerson with breadth-first path selection (Edmonds-Karp).
#[derive(Clone, Debug, Default)]
pub struct EdmondsKarp {
    config: SolverConfig,
}

impl EdmondsKarp {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// A solver that never retracts flow. See [`Augmentation::ForwardOnly`].
    pub fn forward_only() -> Self {
        Self::new(SolverConfig::forward_only())
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl MaxFlow for EdmondsKarp {
    fn name(&self) -> &'static str {
        match self.config.augmentation {
            Augmentation::ForwardOnly => "edmonds-karp (forward only)",
            Augmentation::Cancelling => "edmonds-karp",
        }
    }

    fn max_flow<C: Capacity>(
        &mut self,
        graph: &mut FlowGraph<C>,
        source: usize,
        sink: usize,
    ) -> Result<C, Error> {
        let mut total_flow = C::zero();
        if source == sink {
            return Ok(total_flow);
        }

        let mut augmentations = 0;
        loop {
            let traversal = search(graph, source, sink, self.config.augmentation);
            let Some(path) = traversal.path() else {
                break;
            };

            if let Some(max) = self.config.max_augmentations {
                if augmentations >= max {
                    log::warn!("stopping after {max} augmenting paths, flow so far = {total_flow}");
                    return Err(Error::AugmentationBudgetExceeded(max));
                }
            }

            // the path is non-empty and every link on it has positive residual capacity
            let bottleneck = path
                .iter()
                .map(|&link| graph.residual(link))
                .min()
                .unwrap_or_else(C::zero);
            total_flow = total_flow
                .checked_add(&bottleneck)
                .ok_or(Error::ArithmeticOverflow)?;

            for &link in &path {
                log::trace!(
                    "push {bottleneck} on edge {} ({} -> {})",
                    link.edge(),
                    graph.edge(link.edge()).from(),
                    graph.edge(link.edge()).to()
                );
                graph.push(link, bottleneck);
            }

            augmentations += 1;
            log::debug!(
                "augmenting path #{augmentations}: {} edges, bottleneck = {bottleneck}",
                path.len()
            );
        }

        log::info!("{}: max flow = {total_flow} after {augmentations} paths", self.name());
        Ok(total_flow)
    }
}
