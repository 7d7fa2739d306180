use crate::entities::{Floorplan, RPInstance};
use crate::error::{RPError, Result};
use crate::seq_pair::ObliqueGrid;
use crate::util::assertions;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// A pair of permutations of the rectangle ids (often denoted Γ+ and Γ-),
/// jointly encoding the relative position of every pair of rectangles.
///
/// The [`ObliqueGrid`] is derived from the pair and kept in sync with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequencePair {
    a: Vec<usize>,
    b: Vec<usize>,
    grid: ObliqueGrid,
}

impl SequencePair {
    pub fn new(a: Vec<usize>, b: Vec<usize>) -> Result<Self> {
        if a.len() != b.len() {
            return Err(RPError::InvalidSequencePair(format!(
                "sequences must have the same length, got {} and {}",
                a.len(),
                b.len()
            )));
        }
        for seq in [&a, &b] {
            if !assertions::is_permutation(seq) {
                return Err(RPError::InvalidSequencePair(format!(
                    "{seq:?} is not a permutation of 0..{}",
                    seq.len()
                )));
            }
        }
        let grid = ObliqueGrid::from_valid_pair(&a, &b);
        Ok(SequencePair { a, b, grid })
    }

    /// Both sequences in ascending order: all rectangles in a single horizontal row.
    pub fn horizontal(n: usize) -> Self {
        let a = (0..n).collect_vec();
        Self::new(a.clone(), a).expect("identity is a valid permutation")
    }

    /// Second sequence reversed: all rectangles stacked in a single vertical column.
    pub fn vertical(n: usize) -> Self {
        let a = (0..n).collect_vec();
        let b = (0..n).rev().collect_vec();
        Self::new(a, b).expect("reversed identity is a valid permutation")
    }

    /// Recovers the sequence-pair from an oblique grid
    pub fn encode(grid: &ObliqueGrid) -> Self {
        let (a, b) = grid.to_pair();
        SequencePair {
            a,
            b,
            grid: grid.clone(),
        }
    }

    /// Decodes the pair into a [`Floorplan`], see [`crate::seq_pair::decode`].
    pub fn decode(&self, instance: &RPInstance, rotations: Option<&[usize]>) -> Result<Floorplan> {
        super::decode(&self.a, &self.b, instance, rotations)
    }

    /// The first sequence (Γ+)
    pub fn a(&self) -> &[usize] {
        &self.a
    }

    /// The second sequence (Γ-)
    pub fn b(&self) -> &[usize] {
        &self.b
    }

    pub fn n(&self) -> usize {
        self.a.len()
    }

    pub fn oblique_grid(&self) -> &ObliqueGrid {
        &self.grid
    }

    pub fn into_pair(self) -> (Vec<usize>, Vec<usize>) {
        (self.a, self.b)
    }
}

impl Display for SequencePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SequencePair(({:?}, {:?}))", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq_pair::GridCoord;

    #[test]
    fn rejects_invalid_pairs() {
        assert!(SequencePair::new(vec![0, 1], vec![0]).is_err());
        assert!(SequencePair::new(vec![0, 0], vec![0, 1]).is_err());
        assert!(SequencePair::new(vec![0, 2], vec![0, 1]).is_err());
        assert!(SequencePair::new(vec![], vec![]).is_ok());
    }

    #[test]
    fn grid_follows_the_pair() {
        let sp = SequencePair::new(vec![0, 1, 3, 2], vec![3, 0, 2, 1]).unwrap();
        let coords = sp.oblique_grid().coordinates();
        assert_eq!(coords[0], GridCoord { a: 0, b: 1 });
        assert_eq!(coords[1], GridCoord { a: 1, b: 3 });
        assert_eq!(coords[2], GridCoord { a: 3, b: 2 });
        assert_eq!(coords[3], GridCoord { a: 2, b: 0 });
        assert_eq!(SequencePair::encode(sp.oblique_grid()), sp);
    }

    #[test]
    fn display_matches_pair() {
        let sp = SequencePair::new(vec![0, 1, 3, 2], vec![3, 0, 2, 1]).unwrap();
        assert_eq!(sp.to_string(), "SequencePair(([0, 1, 3, 2], [3, 0, 2, 1]))");
    }

    #[test]
    fn canonical_pairs() {
        assert_eq!(SequencePair::horizontal(3).b(), &[0, 1, 2]);
        assert_eq!(SequencePair::vertical(3).b(), &[2, 1, 0]);
    }
}
