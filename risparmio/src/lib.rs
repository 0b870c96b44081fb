//! # Risparmio
//!
//! Risparmio computes, for a small undirected weighted network given as a
//! textual cost matrix, the maximum saving achievable by replacing the full
//! link set with a greedily-selected minimal connecting edge set.
//!
//! ## Examples
//!
//! ```
//! use risparmio::{Analyzer, Network};
//!
//! let network_def = "-,3,7
//! 3,-,2
//! 7,2,-";
//!
//! let network = Network::from_reader(network_def.as_bytes(), &["A", "B", "C"])?;
//! let analyzer = Analyzer::new(network);
//! let mut worker = analyzer.new_worker();
//! worker.run()?;
//!
//! assert_eq!(worker.total_cost(), 12);
//! assert_eq!(worker.connector_cost(), 5);
//! assert_eq!(worker.max_saving(), 7);
//! # Ok::<(), risparmio::errors::RisparmioError>(())
//! ```
#![deny(missing_docs)]

pub mod analyzer;
mod common;
pub mod edge;
pub mod errors;
pub mod network;
mod utils;

#[cfg(test)]
mod tests;

pub use analyzer::Analyzer;
pub use edge::Edge;
pub use network::Network;
