use core::cmp::min;

use serde::{Deserialize, Serialize};

use crate::capacity::Capacity;
use crate::error::Error;

/// Throughput limits of a single data center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DataCenter<C> {
    max_in: C,
    max_out: C,
}

impl<C: Capacity> DataCenter<C> {
    pub fn new(max_in: C, max_out: C) -> Result<Self, Error> {
        if max_in.is_negative() || max_out.is_negative() {
            Err(Error::NegativeCapacity)
        } else {
            Ok(Self { max_in, max_out })
        }
    }

    pub fn max_in(&self) -> C {
        self.max_in
    }

    pub fn max_out(&self) -> C {
        self.max_out
    }

    /// The combined limit `min(max_in, max_out)`, used to cap every channel into this data center.
    pub fn node_cap(&self) -> C {
        min(self.max_in, self.max_out)
    }
}

/// Unvalidated data center row carrying its identifier, e.g. as read from a CSV file.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RawDataCenter<Id, C> {
    pub id: Id,
    pub max_in: C,
    pub max_out: C,
}

impl<Id, C: Capacity> RawDataCenter<Id, C> {
    /// Splits the row into its identifier and validated limits.
    pub fn validate(self) -> Result<(Id, DataCenter<C>), Error> {
        Ok((self.id, DataCenter::new(self.max_in, self.max_out)?))
    }
}
