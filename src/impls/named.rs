use alloc::collections::BTreeMap;
use alloc::format;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::algo::edmonds_karp::EdmondsKarp;
use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::channel::Channel;
use crate::datacenter::DataCenter;
use crate::error::Error;
use crate::network::Network;

/// A network whose data centers are keyed by arbitrary identifiers, e.g. names read from a file.
///
/// Identifiers are mapped to dense indices in sorted order before solving.
#[derive(Clone, Debug)]
pub struct NamedNetwork<Id, C> {
    data_centers: BTreeMap<Id, DataCenter<C>>,
    channels: Vec<Channel<Id, C>>,
}

impl<Id, C> Default for NamedNetwork<Id, C> {
    fn default() -> Self {
        Self {
            data_centers: BTreeMap::new(),
            channels: Vec::new(),
        }
    }
}

impl<Id, C> NamedNetwork<Id, C>
where
    Id: Ord + Clone + Debug,
    C: Capacity,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_data_center(
        &mut self,
        id: Id,
        data_center: DataCenter<C>,
    ) -> Result<&mut Self, Error> {
        if self.data_centers.contains_key(&id) {
            return Err(Error::DuplicateDataCenter(format!("{id:?}")));
        }
        self.data_centers.insert(id, data_center);
        Ok(self)
    }

    /// Channels may be added before their endpoints; ids are resolved when solving.
    pub fn add_channel(&mut self, channel: Channel<Id, C>) -> &mut Self {
        self.channels.push(channel);
        self
    }

    pub fn len(&self) -> usize {
        self.data_centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_centers.is_empty()
    }

    fn mapping(&self) -> BTreeMap<&Id, usize> {
        self.data_centers
            .keys()
            .enumerate()
            .map(|(idx, id)| (id, idx))
            .collect()
    }

    fn resolve(mapping: &BTreeMap<&Id, usize>, id: &Id) -> Result<usize, Error> {
        mapping
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownDataCenter(format!("{id:?}")))
    }

    /// The dense network plus the indices of `origin` and `targets` in it.
    pub fn to_network(
        &self,
        origin: &Id,
        targets: &[Id],
    ) -> Result<(Network<C>, usize, Vec<usize>), Error> {
        let mapping = self.mapping();

        let mut network = Network::new(self.data_centers.values().copied().collect());
        for channel in &self.channels {
            let from = Self::resolve(&mapping, channel.from())?;
            let to = Self::resolve(&mapping, channel.to())?;
            network.add_channel(from, to, channel.capacity())?;
        }

        let origin = Self::resolve(&mapping, origin)?;
        let targets = targets
            .iter()
            .map(|t| Self::resolve(&mapping, t))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((network, origin, targets))
    }

    pub fn solve_with<A: MaxFlow>(
        &self,
        algo: &mut A,
        origin: &Id,
        targets: &[Id],
    ) -> Result<C, Error> {
        let (network, origin, targets) = self.to_network(origin, targets)?;
        network.solve_with(algo, origin, &targets)
    }

    pub fn solve(&self, origin: &Id, targets: &[Id]) -> Result<C, Error> {
        self.solve_with(&mut EdmondsKarp::default(), origin, targets)
    }
}
