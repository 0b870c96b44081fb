use std::io::{prelude::*, BufReader, Read};

use hashbrown::HashSet;

use crate::errors::{Result, RisparmioError};
use crate::network::matrix::CostMatrix;
use crate::network::Network;
use crate::utils;

const NO_EDGE_MARKER: &str = "-";

impl Network {
    /// Creates a new instance from a textual cost matrix.
    ///
    /// The text must contain one row per line with comma-separated
    /// cells. A cell is a non-negative base-10 integer, or empty, or
    /// `-`; the latter two mean "no edge". The number of rows and of
    /// cells per row must equal the number of labels.
    ///
    /// Note that the reader is buffered automatically, so you should not
    /// wrap `rdr` in a buffered reader like `io::BufReader`.
    ///
    /// # Errors
    ///
    /// [`RisparmioError`] is returned when
    ///
    ///  - the matrix text is ill-formed or mis-sized, or
    ///  - the labels are empty, non-unique, or too many.
    pub fn from_reader<R>(rdr: R, labels: &[&str]) -> Result<Self>
    where
        R: Read,
    {
        Self::build(rdr, labels.iter().map(|&l| l.to_string()).collect())
    }

    /// Creates a new instance from a textual cost matrix and a label
    /// file with one label per line (empty lines are skipped).
    ///
    /// # Errors
    ///
    /// See [`Network::from_reader()`].
    pub fn from_readers<M, L>(matrix_rdr: M, label_rdr: L) -> Result<Self>
    where
        M: Read,
        L: Read,
    {
        let reader = BufReader::new(label_rdr);
        let mut labels = vec![];
        for line in reader.lines() {
            let line = line?;
            if !line.is_empty() {
                labels.push(line);
            }
        }
        Self::build(matrix_rdr, labels)
    }

    fn build<R>(rdr: R, labels: Vec<String>) -> Result<Self>
    where
        R: Read,
    {
        let num_vertices = Self::validate_labels(&labels)?;

        let reader = BufReader::new(rdr);
        let mut data = Vec::with_capacity(num_vertices * num_vertices);
        let mut num_rows = 0;

        for (row, line) in reader.lines().enumerate() {
            let line = line?;
            if num_rows == num_vertices {
                return Err(RisparmioError::invalid_format(
                    "network",
                    format!("The number of rows must be {num_vertices}."),
                ));
            }
            let cells = utils::parse_csv_row(&line);
            if cells.len() != num_vertices {
                let msg = format!(
                    "Row {row} must consist of {num_vertices} comma-separated cells, {line}"
                );
                return Err(RisparmioError::invalid_format("network", msg));
            }
            for (col, cell) in cells.iter().enumerate() {
                data.push(Self::parse_cell(cell, row, col)?);
            }
            num_rows += 1;
        }
        if num_rows != num_vertices {
            return Err(RisparmioError::invalid_format(
                "network",
                format!("The number of rows must be {num_vertices}, not {num_rows}."),
            ));
        }

        Ok(Self {
            labels,
            matrix: CostMatrix::new(data, num_vertices),
        })
    }

    fn validate_labels(labels: &[String]) -> Result<usize> {
        if labels.is_empty() {
            return Err(RisparmioError::invalid_argument(
                "labels",
                "The label list must not be empty.",
            ));
        }
        if u16::try_from(labels.len()).is_err() {
            return Err(RisparmioError::invalid_argument(
                "labels",
                format!("The number of labels must fit u16, {}", labels.len()),
            ));
        }
        let mut seen = HashSet::new();
        for label in labels {
            if label.is_empty() {
                return Err(RisparmioError::invalid_argument(
                    "labels",
                    "A label must not be empty.",
                ));
            }
            if !seen.insert(label.as_str()) {
                return Err(RisparmioError::invalid_argument(
                    "labels",
                    format!("Labels must be unique, {label}"),
                ));
            }
        }
        Ok(labels.len())
    }

    fn parse_cell(cell: &str, row: usize, col: usize) -> Result<u32> {
        if cell.is_empty() || cell == NO_EDGE_MARKER {
            return Ok(0);
        }
        cell.parse().map_err(|_| {
            let msg = format!(
                "The cell at row {row} and column {col} must be empty, `{NO_EDGE_MARKER}`, or a non-negative integer, {cell}"
            );
            RisparmioError::invalid_format("network", msg)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2x2() {
        let text = "-,14
14,-";
        let network = Network::from_reader(text.as_bytes(), &["A", "B"]).unwrap();
        assert_eq!(network.num_vertices(), 2);
        assert_eq!(network.matrix.cost(0, 1), 14);
        assert_eq!(network.matrix.cost(1, 0), 14);
        assert_eq!(network.matrix.cost(0, 0), 0);
    }

    #[test]
    fn test_empty_cell_means_no_edge() {
        let text = ",14
14,";
        let network = Network::from_reader(text.as_bytes(), &["A", "B"]).unwrap();
        assert_eq!(network.matrix.cost(0, 0), 0);
        assert_eq!(network.matrix.cost(1, 1), 0);
    }

    #[test]
    fn test_quoted_cell() {
        let text = "-,\"14\"
14,-";
        let network = Network::from_reader(text.as_bytes(), &["A", "B"]).unwrap();
        assert_eq!(network.matrix.cost(0, 1), 14);
    }

    #[test]
    fn test_from_readers() {
        let text = "-,14
14,-";
        let labels = "A
B
";
        let network = Network::from_readers(text.as_bytes(), labels.as_bytes()).unwrap();
        assert_eq!(network.num_vertices(), 2);
        assert_eq!(network.label(0), "A");
        assert_eq!(network.label(1), "B");
    }

    #[test]
    fn test_bad_cell() {
        let text = "-,14
x,-";
        let result = Network::from_reader(text.as_bytes(), &["A", "B"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_cell() {
        let text = "-,-14
14,-";
        let result = Network::from_reader(text.as_bytes(), &["A", "B"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fewer_rows() {
        let text = "-,14";
        let result = Network::from_reader(text.as_bytes(), &["A", "B"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_more_rows() {
        let text = "-,14
14,-
-,-";
        let result = Network::from_reader(text.as_bytes(), &["A", "B"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fewer_cells() {
        let text = "-,14
14";
        let result = Network::from_reader(text.as_bytes(), &["A", "B"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_more_cells() {
        let text = "-,14,10
14,-";
        let result = Network::from_reader(text.as_bytes(), &["A", "B"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_labels() {
        let result = Network::from_reader("".as_bytes(), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_label() {
        let text = "-,14
14,-";
        let result = Network::from_reader(text.as_bytes(), &["A", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_labels() {
        let text = "-,14
14,-";
        let result = Network::from_reader(text.as_bytes(), &["A", "A"]);
        assert!(result.is_err());
    }
}
