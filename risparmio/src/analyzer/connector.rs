use crate::edge::Edge;
use crate::errors::{Result, RisparmioError};

/// Working edge set approximating a minimum connecting subgraph.
///
/// The set is filled in three steps: greedy per-vertex selection
/// ([`select_cheapest()`](Connector::select_cheapest)), connectivity
/// closure ([`close()`](Connector::close)), and isolation repair
/// ([`repair()`](Connector::repair)). The per-vertex greedy choice is a
/// heuristic, not a spanning-tree construction; repair can therefore
/// pick edges a true minimum spanning tree would avoid.
#[derive(Default)]
pub struct Connector {
    edges: Vec<Edge>,
    connected: Vec<bool>,
    num_repaired: usize,
}

impl Connector {
    pub fn reset(&mut self, num_vertices: usize) {
        self.edges.clear();
        self.connected.clear();
        self.connected.resize(num_vertices, false);
        self.num_repaired = 0;
    }

    /// Takes the cheapest incident edge of every vertex that has one and
    /// keeps the first occurrence of every unordered pair.
    ///
    /// Two vertices whose mutually cheapest edge is the same link
    /// contribute it once.
    pub fn select_cheapest(&mut self, edge_lists: &[Vec<Edge>]) {
        debug_assert_eq!(self.connected.len(), edge_lists.len());
        for list in edge_lists {
            if let Some(&cheapest) = list.first() {
                self.push_if_new_pair(cheapest);
            }
        }
    }

    /// Marks every vertex reachable from the first edge's endpoints.
    ///
    /// Iterates to a fixed point, so propagation order does not matter.
    pub fn close(&mut self) {
        self.connected.fill(false);
        if let Some(first) = self.edges.first() {
            self.connected[usize::from(first.source())] = true;
            self.connected[usize::from(first.target())] = true;
        }
        loop {
            let mut changed = false;
            for edge in &self.edges {
                let source = self.connected[usize::from(edge.source())];
                let target = self.connected[usize::from(edge.target())];
                if source != target {
                    self.connected[usize::from(edge.source())] = true;
                    self.connected[usize::from(edge.target())] = true;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
    }

    /// Extends the edge set until every connectable vertex is reachable
    /// from the first edge.
    ///
    /// The first isolated vertex in label order gets its second-cheapest
    /// incident edge appended, then connectivity is recomputed. Vertices
    /// with an empty incident-edge list are not connectable and are
    /// skipped.
    ///
    /// # Errors
    ///
    /// [`RisparmioError`] is returned when an isolated vertex has fewer
    /// than two incident edges, or when its second-cheapest edge is
    /// already in the set and no progress is possible.
    pub fn repair(&mut self, edge_lists: &[Vec<Edge>], labels: &[String]) -> Result<()> {
        debug_assert_eq!(self.connected.len(), edge_lists.len());
        while let Some(isolated) = self.first_isolated(edge_lists) {
            let list = &edge_lists[usize::from(isolated)];
            if list.len() < 2 {
                return Err(RisparmioError::insufficient_edges(
                    labels[usize::from(isolated)].as_str(),
                    "An isolated vertex must have at least two incident edges.",
                ));
            }
            let fallback = list[1];
            if !self.push_if_new_pair(fallback) {
                return Err(RisparmioError::insufficient_edges(
                    labels[usize::from(isolated)].as_str(),
                    "No unused incident edge is left to restore connectivity.",
                ));
            }
            self.num_repaired += 1;
            self.close();
        }
        Ok(())
    }

    fn first_isolated(&self, edge_lists: &[Vec<Edge>]) -> Option<u16> {
        self.connected
            .iter()
            .zip(edge_lists)
            .position(|(&connected, list)| !connected && !list.is_empty())
            .map(|v| v as u16)
    }

    fn push_if_new_pair(&mut self, edge: Edge) -> bool {
        if self.edges.iter().any(|e| e.connects_same_pair(&edge)) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Gets the edges currently in the set.
    #[inline(always)]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Checks if the vertex is reachable from the first edge.
    #[inline(always)]
    pub fn is_connected(&self, id: u16) -> bool {
        self.connected[usize::from(id)]
    }

    /// Gets the number of edges appended by [`repair()`](Connector::repair).
    #[inline(always)]
    pub const fn num_repaired(&self) -> usize {
        self.num_repaired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connector_with(num_vertices: usize, edges: &[Edge]) -> Connector {
        let mut connector = Connector::default();
        connector.reset(num_vertices);
        connector.edges.extend_from_slice(edges);
        connector
    }

    #[test]
    fn test_select_mutually_cheapest_once() {
        // A and B both pick the same link.
        let edge_lists = vec![
            vec![Edge::new(0, 1, 3), Edge::new(0, 2, 7)],
            vec![Edge::new(1, 0, 3)],
            vec![Edge::new(2, 0, 7)],
        ];
        let mut connector = Connector::default();
        connector.reset(3);
        connector.select_cheapest(&edge_lists);
        assert_eq!(
            connector.edges(),
            &[Edge::new(0, 1, 3), Edge::new(2, 0, 7)]
        );
    }

    #[test]
    fn test_close_seeds_from_first_edge() {
        let mut connector = connector_with(4, &[Edge::new(0, 1, 1), Edge::new(2, 3, 1)]);
        connector.close();
        assert!(connector.is_connected(0));
        assert!(connector.is_connected(1));
        assert!(!connector.is_connected(2));
        assert!(!connector.is_connected(3));
    }

    #[test]
    fn test_close_reaches_fixed_point() {
        // Propagation must revisit edges listed before their connecting
        // link; a bounded number of passes would leave vertex 5
        // unreached.
        let edges = [
            Edge::new(0, 1, 1),
            Edge::new(4, 5, 1),
            Edge::new(2, 3, 1),
            Edge::new(1, 2, 1),
            Edge::new(3, 4, 1),
        ];
        let mut connector = connector_with(6, &edges);
        connector.close();
        for v in 0..6 {
            assert!(connector.is_connected(v));
        }
    }

    #[test]
    fn test_close_empty() {
        let mut connector = connector_with(3, &[]);
        connector.close();
        for v in 0..3 {
            assert!(!connector.is_connected(v));
        }
    }

    #[test]
    fn test_repair_appends_second_cheapest() {
        let edge_lists = vec![
            vec![Edge::new(0, 1, 1)],
            vec![Edge::new(1, 0, 1), Edge::new(1, 2, 5)],
            vec![Edge::new(2, 3, 2), Edge::new(2, 1, 5)],
            vec![Edge::new(3, 2, 2)],
        ];
        let labels = vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()];
        let mut connector = Connector::default();
        connector.reset(4);
        connector.select_cheapest(&edge_lists);
        connector.close();
        connector.repair(&edge_lists, &labels).unwrap();

        assert_eq!(
            connector.edges(),
            &[Edge::new(0, 1, 1), Edge::new(2, 3, 2), Edge::new(2, 1, 5)]
        );
        assert_eq!(connector.num_repaired(), 1);
        for v in 0..4 {
            assert!(connector.is_connected(v));
        }
    }

    #[test]
    fn test_repair_single_edge_vertex() {
        // C's only link leads into a disconnected component.
        let edge_lists = vec![
            vec![Edge::new(0, 1, 1)],
            vec![Edge::new(1, 0, 1)],
            vec![Edge::new(2, 3, 5)],
            vec![],
        ];
        let labels = vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()];
        let mut connector = Connector::default();
        connector.reset(4);
        connector.select_cheapest(&edge_lists);
        connector.close();
        let result = connector.repair(&edge_lists, &labels);
        assert!(result.is_err());
    }

    #[test]
    fn test_repair_no_unused_edge() {
        // Two internally connected components with no link between them:
        // the second-cheapest edge of the first isolated vertex is
        // already in the set.
        let edge_lists = vec![
            vec![Edge::new(0, 1, 1)],
            vec![Edge::new(1, 0, 1)],
            vec![Edge::new(2, 3, 1), Edge::new(2, 4, 2)],
            vec![Edge::new(3, 2, 1), Edge::new(3, 4, 3)],
            vec![Edge::new(4, 2, 2), Edge::new(4, 3, 3)],
        ];
        let labels = vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
            "E".to_string(),
        ];
        let mut connector = Connector::default();
        connector.reset(5);
        connector.select_cheapest(&edge_lists);
        connector.close();
        let result = connector.repair(&edge_lists, &labels);
        assert!(result.is_err());
    }

    #[test]
    fn test_repair_skips_edgeless_vertex() {
        let edge_lists = vec![vec![Edge::new(0, 1, 1)], vec![Edge::new(1, 0, 1)], vec![]];
        let labels = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut connector = Connector::default();
        connector.reset(3);
        connector.select_cheapest(&edge_lists);
        connector.close();
        connector.repair(&edge_lists, &labels).unwrap();
        assert_eq!(connector.num_repaired(), 0);
        assert!(!connector.is_connected(2));
    }
}
