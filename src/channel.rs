use serde::{Deserialize, Serialize};

use crate::capacity::Capacity;
use crate::error::Error;

/// A directed communication channel between two data centers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(
    try_from = "RawChannel<Id, C>",
    bound(deserialize = "Id: Deserialize<'de>, C: Capacity + Deserialize<'de>")
)]
pub struct Channel<Id, C> {
    from: Id,
    to: Id,
    capacity: C,
}

impl<Id, C> Channel<Id, C>
where
    C: Capacity,
{
    /// Channels from a data center back to itself are accepted; they never carry useful flow.
    pub fn new(from: Id, to: Id, capacity: C) -> Result<Self, Error> {
        if capacity.is_negative() {
            Err(Error::NegativeCapacity)
        } else {
            Ok(Self { from, to, capacity })
        }
    }
}

impl<Id, C: Copy> Channel<Id, C> {
    pub fn from(&self) -> &Id {
        &self.from
    }

    pub fn to(&self) -> &Id {
        &self.to
    }

    pub fn capacity(&self) -> C {
        self.capacity
    }
}

/// Unvalidated channel row, e.g. as read from a CSV file.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RawChannel<Id, C> {
    pub from: Id,
    pub to: Id,
    pub capacity: C,
}

impl<Id, C> TryFrom<RawChannel<Id, C>> for Channel<Id, C>
where
    C: Capacity,
{
    type Error = Error;

    fn try_from(c: RawChannel<Id, C>) -> Result<Self, Self::Error> {
        Self::new(c.from, c.to, c.capacity)
    }
}

impl<Id, C> From<Channel<Id, C>> for RawChannel<Id, C> {
    fn from(c: Channel<Id, C>) -> Self {
        Self {
            from: c.from,
            to: c.to,
            capacity: c.capacity,
        }
    }
}
