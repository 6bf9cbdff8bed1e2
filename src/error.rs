use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid node id {id}, expected a data center index below {count}
    InvalidNodeId { id: usize, count: usize },
    /// Invalid capacity, expected a non-negative value
    NegativeCapacity,
    /// No target data centers given
    EmptyTargets,
    /// Mismatched limits: {max_in} inbound limits but {max_out} outbound limits
    MismatchedLimits { max_in: usize, max_out: usize },
    /// Unknown data center {0}
    UnknownDataCenter(String),
    /// Data center {0} is defined more than once
    DuplicateDataCenter(String),
    /// Augmentation budget of {0} paths exhausted before the flow was maximal
    AugmentationBudgetExceeded(usize),
    /// Arithmetic overflow while accumulating flow
    ArithmeticOverflow,
}
