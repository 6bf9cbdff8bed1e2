//! Maximum throughput between data centers.
//!
//! Every data center has its own inbound and outbound limit on top of the bandwidth of the
//! channels between them. The limits are encoded by splitting each data center `i` into an arrival
//! vertex and a departure vertex joined by an edge, after which an origin-to-targets transfer is
//! an ordinary single-source single-sink maximum flow problem.
//!
//! ```
//! use dcflow::max_throughput;
//!
//! let limits = [5, 3, 3, 5];
//! let channels = [(0, 1, 3), (0, 2, 2), (1, 3, 3), (2, 3, 2)];
//! assert_eq!(max_throughput(&channels, &limits, &limits, 0, &[3]), Ok(5));
//! ```
#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod capacity;
pub mod channel;
pub mod config;
pub mod datacenter;
pub mod error;
pub mod graph;
pub mod impls;
pub mod network;
pub mod node;

pub use crate::algo::edmonds_karp::EdmondsKarp;
pub use crate::algo::push_relabel::PushRelabel;
pub use crate::algo::MaxFlow;
pub use crate::capacity::Capacity;
pub use crate::channel::{Channel, RawChannel};
pub use crate::config::{Augmentation, SolverConfig};
pub use crate::datacenter::{DataCenter, RawDataCenter};
pub use crate::error::Error;
pub use crate::graph::FlowGraph;
pub use crate::impls::named::NamedNetwork;
pub use crate::network::{max_throughput, Network};
pub use crate::node::Node;
