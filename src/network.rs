use alloc::vec::Vec;

use itertools::Itertools;

use crate::algo::edmonds_karp::EdmondsKarp;
use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::channel::Channel;
use crate::datacenter::DataCenter;
use crate::error::Error;
use crate::graph::FlowGraph;
use crate::node::Node;

/// Data centers with their limits and the channels between them.
///
/// Channels are validated as they are added, so a `Network` can always be turned into a flow
/// graph once an origin and targets are chosen.
#[derive(Clone, Debug, Default)]
pub struct Network<C> {
    data_centers: Vec<DataCenter<C>>,
    channels: Vec<Channel<usize, C>>,
}

impl<C: Capacity> Network<C> {
    pub fn new(data_centers: Vec<DataCenter<C>>) -> Self {
        Self {
            data_centers,
            channels: Vec::new(),
        }
    }

    /// Pairs up the parallel `max_in`/`max_out` limit arrays.
    pub fn from_limits(max_in: &[C], max_out: &[C]) -> Result<Self, Error> {
        if max_in.len() != max_out.len() {
            return Err(Error::MismatchedLimits {
                max_in: max_in.len(),
                max_out: max_out.len(),
            });
        }

        let data_centers = max_in
            .iter()
            .zip(max_out)
            .map(|(&i, &o)| DataCenter::new(i, o))
            .collect::<Result<_, _>>()?;
        Ok(Self::new(data_centers))
    }

    pub fn len(&self) -> usize {
        self.data_centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_centers.is_empty()
    }

    pub fn data_centers(&self) -> &[DataCenter<C>] {
        &self.data_centers
    }

    pub fn channels(&self) -> &[Channel<usize, C>] {
        &self.channels
    }

    fn check_id(&self, id: usize) -> Result<usize, Error> {
        if id < self.len() {
            Ok(id)
        } else {
            Err(Error::InvalidNodeId {
                id,
                count: self.len(),
            })
        }
    }

    /// Adds a directed channel `from -> to` with the given bandwidth.
    pub fn add_channel(&mut self, from: usize, to: usize, capacity: C) -> Result<&mut Self, Error> {
        self.check_id(from)?;
        self.check_id(to)?;
        self.channels.push(Channel::new(from, to, capacity)?);
        Ok(self)
    }

    pub fn add_channels<I>(&mut self, channels: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = (usize, usize, C)>,
    {
        for (from, to, capacity) in channels {
            self.add_channel(from, to, capacity)?;
        }
        Ok(self)
    }

    /// Builds the split-node flow graph for sending data from `origin` to `targets`.
    ///
    /// The supersource is [`Node::Source`] and the supersink [`Node::Sink`]. Repeated targets are
    /// wired once and the origin is never wired to the supersink, since data already at the
    /// origin does not need to be transferred.
    pub fn build(&self, origin: usize, targets: &[usize]) -> Result<FlowGraph<C>, Error> {
        let n = self.len();
        self.check_id(origin)?;
        if targets.is_empty() {
            return Err(Error::EmptyTargets);
        }
        for &t in targets {
            self.check_id(t)?;
        }

        let mut graph = FlowGraph::with_data_centers(n);

        // each data center's own throughput ceiling
        for (i, dc) in self.data_centers.iter().enumerate() {
            graph.add_edge(Node::In(i).index(n), Node::Out(i).index(n), dc.max_out());
        }

        // channel bandwidth, further capped by the destination's combined limit
        for channel in &self.channels {
            let (from, to) = (*channel.from(), *channel.to());
            let capacity = channel.capacity().min(self.data_centers[to].node_cap());
            graph.add_edge(Node::Out(from).index(n), Node::In(to).index(n), capacity);
        }

        for t in targets.iter().copied().unique().filter(|&t| t != origin) {
            graph.add_edge(
                Node::In(t).index(n),
                Node::Sink.index(n),
                self.data_centers[t].max_out(),
            );
        }

        graph.add_edge(
            Node::Source.index(n),
            Node::In(origin).index(n),
            self.data_centers[origin].max_out(),
        );

        log::debug!(
            "built flow graph: {} data centers, {} channels, {} edges",
            n,
            self.channels.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Maximum throughput from `origin` to `targets` using the given algorithm.
    pub fn solve_with<A: MaxFlow>(
        &self,
        algo: &mut A,
        origin: usize,
        targets: &[usize],
    ) -> Result<C, Error> {
        let mut graph = self.build(origin, targets)?;
        let n = self.len();
        log::debug!("solving with {}", algo.name());
        algo.max_flow(&mut graph, Node::Source.index(n), Node::Sink.index(n))
    }

    /// Maximum throughput from `origin` to `targets`.
    pub fn solve(&self, origin: usize, targets: &[usize]) -> Result<C, Error> {
        self.solve_with(&mut EdmondsKarp::default(), origin, targets)
    }
}

/// Maximum simultaneous throughput from `origin` to the data centers in `targets`.
///
/// `connections` holds directed channels `(from, to, bandwidth)`; `max_in[i]` and `max_out[i]` are
/// the inbound and outbound limits of data center `i`. All validation happens before any flow is
/// computed.
pub fn max_throughput<C: Capacity>(
    connections: &[(usize, usize, C)],
    max_in: &[C],
    max_out: &[C],
    origin: usize,
    targets: &[usize],
) -> Result<C, Error> {
    let mut network = Network::from_limits(max_in, max_out)?;
    network.add_channels(connections.iter().copied())?;
    network.solve(origin, targets)
}
