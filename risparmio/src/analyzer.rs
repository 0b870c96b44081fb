//! Greedy network-saving analyzer.
pub(crate) mod connector;
pub mod worker;

use crate::analyzer::worker::Worker;
use crate::errors::Result;
use crate::network::Network;

/// Analyzer computing the maximum saving of a network.
///
/// The analyzer owns the read-only [`Network`]; every evaluation runs in
/// a [`Worker`] that owns its short-lived working structures.
pub struct Analyzer {
    network: Network,
}

impl Analyzer {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `network`: Network to be analyzed.
    pub const fn new(network: Network) -> Self {
        Self { network }
    }

    /// Gets the reference to the network.
    pub const fn network(&self) -> &Network {
        &self.network
    }

    /// Creates a new worker.
    pub fn new_worker(&self) -> Worker<'_> {
        Worker::new(self)
    }

    /// Computes the maximum saving of the network in one call.
    ///
    /// Shorthand for running a fresh [`Worker`] and reading
    /// [`max_saving()`](Worker::max_saving).
    ///
    /// # Errors
    ///
    /// See [`Worker::run()`].
    pub fn max_saving(&self) -> Result<i64> {
        let mut worker = self.new_worker();
        worker.run()?;
        Ok(worker.max_saving())
    }
}
