//! Worker evaluating the maximum saving of a network.
use crate::analyzer::connector::Connector;
use crate::analyzer::Analyzer;
use crate::edge::{self, Edge};
use crate::errors::Result;

/// Worker that owns the working structures of one evaluation.
///
/// All derived structures are rebuilt by [`run()`](Worker::run) from the
/// read-only network, so repeated runs yield identical results.
pub struct Worker<'a> {
    analyzer: &'a Analyzer,
    connector: Connector,
    total_cost: u64,
    connector_cost: u64,
}

impl<'a> Worker<'a> {
    pub(crate) fn new(analyzer: &'a Analyzer) -> Self {
        Self {
            analyzer,
            connector: Connector::default(),
            total_cost: 0,
            connector_cost: 0,
        }
    }

    /// Evaluates the network.
    ///
    /// Derives the per-vertex edge lists and the distinct-edge set from
    /// the network, selects the minimal connector, repairs connectivity,
    /// and sums both edge sets.
    ///
    /// # Errors
    ///
    /// [`RisparmioError`](crate::errors::RisparmioError) is returned when
    /// connectivity cannot be restored (see
    /// [`InsufficientEdgesError`](crate::errors::InsufficientEdgesError)).
    pub fn run(&mut self) -> Result<()> {
        let network = self.analyzer.network();
        let edge_lists = network.incident_edge_lists();

        self.connector.reset(network.num_vertices());
        self.connector.select_cheapest(&edge_lists);
        self.connector.close();
        self.connector.repair(&edge_lists, network.labels())?;

        self.total_cost = edge::total_cost(&network.distinct_edges());
        self.connector_cost = edge::total_cost(self.connector.edges());
        Ok(())
    }

    /// Gets the total cost of all distinct edges of the network.
    #[inline(always)]
    pub const fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Gets the cost of the repaired minimal connector.
    #[inline(always)]
    pub const fn connector_cost(&self) -> u64 {
        self.connector_cost
    }

    /// Gets the maximum saving, i.e. the total cost minus the connector
    /// cost.
    ///
    /// The value is negative when the repaired connector costs more than
    /// the distinct-edge total, which asymmetric matrices permit.
    #[inline(always)]
    pub const fn max_saving(&self) -> i64 {
        self.total_cost as i64 - self.connector_cost as i64
    }

    /// Gets the edges of the repaired minimal connector.
    #[inline(always)]
    pub fn connector_edges(&self) -> &[Edge] {
        self.connector.edges()
    }

    /// Gets the number of edges appended to restore connectivity.
    #[inline(always)]
    pub const fn num_repaired(&self) -> usize {
        self.connector.num_repaired()
    }

    /// Checks if the vertex is reachable from the minimal connector.
    ///
    /// A vertex with no incident edge anywhere in the network is never
    /// reachable.
    #[inline(always)]
    pub fn is_connected(&self, id: u16) -> bool {
        self.connector.is_connected(id)
    }
}
