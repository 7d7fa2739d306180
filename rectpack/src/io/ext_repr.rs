use serde::{Deserialize, Serialize};

/// External representation of a rectangle.
/// Accepts `[width, height]`, `[width, height, rotatable]` or `{"width": .., "height": .., "rotatable": ..}`.
/// `rotatable` defaults to `false`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtRectangle {
    Tuple(f64, f64),
    RotatableTuple(f64, f64, bool),
    Record {
        width: f64,
        height: f64,
        #[serde(default)]
        rotatable: bool,
    },
}

impl ExtRectangle {
    /// (width, height, rotatable)
    pub fn parts(&self) -> (f64, f64, bool) {
        match *self {
            ExtRectangle::Tuple(w, h) => (w, h, false),
            ExtRectangle::RotatableTuple(w, h, r) => (w, h, r),
            ExtRectangle::Record {
                width,
                height,
                rotatable,
            } => (width, height, rotatable),
        }
    }
}

/// The external representation of a problem instance: an ordered list of rectangles
pub type ExtInstance = Vec<ExtRectangle>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSequencePair {
    /// First sequence (Γ+)
    pub a: Vec<usize>,
    /// Second sequence (Γ-)
    pub b: Vec<usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedRect {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtFloorplan {
    pub positions: Vec<ExtPlacedRect>,
    pub bounding_box: (f64, f64),
    pub area: f64,
    /// Total area of the rectangles divided by the area of the bounding box
    pub density: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub sequence_pair: ExtSequencePair,
    pub rotations: Vec<usize>,
    pub floorplan: ExtFloorplan,
}
