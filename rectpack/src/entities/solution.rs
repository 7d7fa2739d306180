use crate::entities::{Floorplan, RPInstance};
use crate::error::Result;
use crate::seq_pair::SequencePair;
use std::fmt::{Display, Formatter};

/// Final result of an optimization: the sequence-pair, the orientation of every rectangle and the resulting floorplan.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub sequence_pair: SequencePair,
    /// Rotation flag per rectangle, odd values mean the rectangle is rotated by 90°
    pub rotations: Vec<usize>,
    pub floorplan: Floorplan,
}

impl Solution {
    pub fn new(sequence_pair: SequencePair, rotations: Vec<usize>, floorplan: Floorplan) -> Self {
        Solution {
            sequence_pair,
            rotations,
            floorplan,
        }
    }

    /// Decodes the sequence-pair and rotations of this solution again.
    pub fn redecode(&self, instance: &RPInstance) -> Result<Floorplan> {
        self.sequence_pair.decode(instance, Some(&self.rotations))
    }

    /// Whether rectangle `id` is placed rotated
    pub fn is_rotated(&self, id: usize) -> bool {
        self.rotations.get(id).is_some_and(|r| r % 2 == 1)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Solution({{'sequence_pair': {}, 'floorplan': {}}})",
            self.sequence_pair, self.floorplan
        )
    }
}
