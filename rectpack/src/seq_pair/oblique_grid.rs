use crate::error::{RPError, Result};
use ndarray::Array2;

/// Position of a rectangle in the oblique grid: its index in the first (`a`) and second (`b`) sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub a: usize,
    pub b: usize,
}

/// The `n x n` relative-position matrix equivalent to a sequence-pair.
/// Cell `(a, b)` holds rectangle `i` iff `i` is at index `a` in the first sequence and at index `b` in the second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObliqueGrid {
    cells: Array2<Option<usize>>,
    coordinates: Vec<GridCoord>,
}

impl ObliqueGrid {
    /// Builds the grid of a pair of permutations of `0..n`.
    /// The caller is responsible for `a` and `b` being valid permutations of equal length.
    pub(crate) fn from_valid_pair(a: &[usize], b: &[usize]) -> Self {
        let n = a.len();
        let coordinates = super::grid_coordinates(a, b);
        let mut cells = Array2::from_elem((n, n), None);
        for (id, c) in coordinates.iter().enumerate() {
            cells[[c.a, c.b]] = Some(id);
        }
        ObliqueGrid { cells, coordinates }
    }

    /// Builds a grid from raw cells. Every row and every column must contain exactly one rectangle,
    /// and the rectangle ids must be a permutation of `0..n`.
    pub fn from_cells(cells: Array2<Option<usize>>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(RPError::InvalidSequencePair(format!(
                "oblique grid must be square, got {rows}x{cols}"
            )));
        }
        let n = rows;
        let mut coordinates: Vec<Option<GridCoord>> = vec![None; n];
        let mut row_used = vec![false; n];
        let mut col_used = vec![false; n];

        for ((a, b), cell) in cells.indexed_iter() {
            let Some(id) = *cell else { continue };
            if id >= n || coordinates[id].is_some() {
                return Err(RPError::InvalidSequencePair(format!(
                    "rectangle {id} is out of range or occurs more than once in the oblique grid"
                )));
            }
            if row_used[a] || col_used[b] {
                return Err(RPError::InvalidSequencePair(format!(
                    "row {a} or column {b} of the oblique grid holds more than one rectangle"
                )));
            }
            row_used[a] = true;
            col_used[b] = true;
            coordinates[id] = Some(GridCoord { a, b });
        }

        let coordinates = coordinates
            .into_iter()
            .enumerate()
            .map(|(id, c)| {
                c.ok_or_else(|| {
                    RPError::InvalidSequencePair(format!("rectangle {id} is missing from the oblique grid"))
                })
            })
            .collect::<Result<Vec<GridCoord>>>()?;

        Ok(ObliqueGrid { cells, coordinates })
    }

    pub fn n(&self) -> usize {
        self.coordinates.len()
    }

    /// Rectangle occupying cell `(a, b)`, if any
    pub fn cell(&self, a: usize, b: usize) -> Option<usize> {
        self.cells.get([a, b]).copied().flatten()
    }

    pub fn cells(&self) -> &Array2<Option<usize>> {
        &self.cells
    }

    /// Coordinates of every rectangle, indexed by rectangle id
    pub fn coordinates(&self) -> &[GridCoord] {
        &self.coordinates
    }

    pub fn coord(&self, id: usize) -> GridCoord {
        self.coordinates[id]
    }

    /// Recovers the pair of sequences by reading the occupied cells in row and column order.
    pub fn to_pair(&self) -> (Vec<usize>, Vec<usize>) {
        let n = self.n();
        let mut a = vec![0; n];
        let mut b = vec![0; n];
        for ((row, col), cell) in self.cells.indexed_iter() {
            if let Some(id) = *cell {
                a[row] = id;
                b[col] = id;
            }
        }
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn horizontal_pair_lies_on_the_diagonal() {
        let grid = ObliqueGrid::from_valid_pair(&[0, 1, 2, 3], &[0, 1, 2, 3]);
        for i in 0..4 {
            assert_eq!(grid.cell(i, i), Some(i));
            assert_eq!(grid.coord(i), GridCoord { a: i, b: i });
        }
        assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 4);
    }

    #[test]
    fn vertical_pair_lies_on_the_anti_diagonal() {
        let grid = ObliqueGrid::from_valid_pair(&[0, 1, 2, 3], &[3, 2, 1, 0]);
        assert_eq!(grid.cell(0, 3), Some(0));
        assert_eq!(grid.cell(1, 2), Some(1));
        assert_eq!(grid.cell(2, 1), Some(2));
        assert_eq!(grid.cell(3, 0), Some(3));
        assert_eq!(grid.cell(0, 0), None);
        assert_eq!(grid.coord(2), GridCoord { a: 2, b: 1 });
    }

    #[test]
    fn from_cells_reads_back_the_pair() {
        let cells = array![
            [None, Some(0), None],
            [None, None, Some(2)],
            [Some(1), None, None]
        ];
        let grid = ObliqueGrid::from_cells(cells).unwrap();
        assert_eq!(grid.to_pair(), (vec![0, 2, 1], vec![1, 0, 2]));
    }

    #[test]
    fn from_cells_rejects_malformed_grids() {
        let two_in_a_row = array![[Some(0), Some(1)], [None, None]];
        assert!(ObliqueGrid::from_cells(two_in_a_row).is_err());

        let duplicate = array![[Some(0), None], [None, Some(0)]];
        assert!(ObliqueGrid::from_cells(duplicate).is_err());

        let missing = array![[Some(0), None], [None, None]];
        assert!(ObliqueGrid::from_cells(missing).is_err());

        let not_square = Array2::from_elem((2, 3), None);
        assert!(ObliqueGrid::from_cells(not_square).is_err());
    }
}
