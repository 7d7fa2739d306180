mod constraint_graph;
mod decode;
mod oblique_grid;
mod sequence_pair;

#[doc(inline)]
pub use constraint_graph::ConstraintGraph;
#[doc(inline)]
pub use decode::decode;
#[doc(inline)]
pub use decode::grid_coordinates;
#[doc(inline)]
pub use oblique_grid::GridCoord;
#[doc(inline)]
pub use oblique_grid::ObliqueGrid;
#[doc(inline)]
pub use sequence_pair::SequencePair;
