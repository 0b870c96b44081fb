//! Network model built from a textual cost matrix.
pub(crate) mod builder;
pub(crate) mod matrix;

use std::io::{Read, Write};

use bincode::{Decode, Encode};
use hashbrown::HashSet;

use crate::common;
use crate::edge::Edge;
use crate::errors::{Result, RisparmioError};
use matrix::CostMatrix;

const MODEL_MAGIC: &[u8] = b"RisparmioNetwork 0.1\n";

/// Weighted undirected network over a fixed ordered set of labeled
/// vertices.
///
/// A network is built once from a textual cost matrix (see
/// [`Network::from_reader()`]) and is read-only afterwards.
#[derive(Decode, Encode)]
pub struct Network {
    labels: Vec<String>,
    matrix: CostMatrix,
}

impl Network {
    /// Gets the number of vertices.
    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// Gets the label of the vertex `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline(always)]
    pub fn label(&self, id: u16) -> &str {
        &self.labels[usize::from(id)]
    }

    /// Gets the id of the vertex labeled `label`, or [`None`] if the
    /// label is unknown.
    pub fn vertex_id(&self, label: &str) -> Option<u16> {
        self.labels.iter().position(|l| l == label).map(|i| i as u16)
    }

    #[inline(always)]
    pub(crate) fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Builds, for every vertex, the list of its incident edges ordered
    /// by ascending cost.
    ///
    /// Ties keep the column-scan order. A vertex whose row has no
    /// non-zero cell gets an empty list; such a vertex cannot be
    /// connected by any edge set.
    pub(crate) fn incident_edge_lists(&self) -> Vec<Vec<Edge>> {
        let num_vertices = self.num_vertices() as u16;
        let mut lists = Vec::with_capacity(self.num_vertices());
        for row in 0..num_vertices {
            let mut edges = vec![];
            for col in 0..num_vertices {
                if row == col {
                    continue;
                }
                let cost = self.matrix.cost(row, col);
                if cost != 0 {
                    edges.push(Edge::new(row, col, cost));
                }
            }
            // sort_by_key is stable, preserving the column-scan order on
            // equal costs.
            edges.sort_by_key(Edge::cost);
            lists.push(edges);
        }
        lists
    }

    /// Scans the matrix row-major and returns every unordered vertex
    /// pair with a non-zero cost exactly once, in first-encountered
    /// order.
    pub(crate) fn distinct_edges(&self) -> Vec<Edge> {
        let num_vertices = self.num_vertices() as u16;
        let mut seen = HashSet::new();
        let mut edges = vec![];
        for row in 0..num_vertices {
            for col in 0..num_vertices {
                if row == col {
                    continue;
                }
                let cost = self.matrix.cost(row, col);
                if cost == 0 {
                    continue;
                }
                if seen.insert((row.min(col), row.max(col))) {
                    edges.push(Edge::new(row, col, cost));
                }
            }
        }
        edges
    }

    /// Exports the network model.
    ///
    /// # Errors
    ///
    /// When bincode generates an error, it will be returned as is.
    pub fn write<W>(&self, mut wtr: W) -> Result<usize>
    where
        W: Write,
    {
        wtr.write_all(MODEL_MAGIC)?;
        let num_bytes = bincode::encode_into_std_write(self, &mut wtr, common::bincode_config())?;
        Ok(num_bytes + MODEL_MAGIC.len())
    }

    /// Creates a network model from a reader.
    ///
    /// # Errors
    ///
    /// [`RisparmioError`] is returned when the magic number of the input
    /// mismatches, or when bincode generates an error.
    #[cfg(not(feature = "unchecked"))]
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; MODEL_MAGIC.len()];
        rdr.read_exact(&mut magic)?;
        if magic != *MODEL_MAGIC {
            return Err(RisparmioError::invalid_format(
                "model",
                "The magic number of the input model mismatches.",
            ));
        }
        let data = bincode::decode_from_std_read(&mut rdr, common::bincode_config())?;
        Ok(data)
    }

    /// Creates a network model from a reader.
    ///
    /// # Safety
    ///
    /// The given reader must be a correct file exported by
    /// [`Network::write()`].
    ///
    /// # Errors
    ///
    /// When bincode generates an error, it will be returned as is.
    #[cfg(feature = "unchecked")]
    pub unsafe fn read_unchecked<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; MODEL_MAGIC.len()];
        rdr.read_exact(&mut magic)?;
        let data = bincode::decode_from_std_read(&mut rdr, common::bincode_config())?;
        Ok(data)
    }
}
