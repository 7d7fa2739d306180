use crate::entities::{RPInstance, SizeLimits};
use crate::util::FPA;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// A rectangle placed in a floorplan, anchored at its bottom-left corner.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PlacedRect {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    /// Width as placed (after rotation)
    pub width: f64,
    /// Height as placed (after rotation)
    pub height: f64,
}

impl PlacedRect {
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the interiors of both rectangles intersect. Touching edges do not count.
    pub fn overlaps(&self, other: &PlacedRect) -> bool {
        self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }

    /// Same as [`PlacedRect::overlaps`], but overlaps within floating point tolerance are ignored.
    pub fn almost_overlaps(&self, other: &PlacedRect) -> bool {
        FPA(self.x) < FPA(other.x_max())
            && FPA(other.x) < FPA(self.x_max())
            && FPA(self.y) < FPA(other.y_max())
            && FPA(other.y) < FPA(self.y_max())
    }
}

impl Display for PlacedRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{'id': {}, 'x': {}, 'y': {}, 'width': {}, 'height': {}}}",
            self.id, self.x, self.y, self.width, self.height
        )
    }
}

/// Concrete placement of all rectangles, as decoded from a sequence-pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Floorplan {
    /// One entry per rectangle, order is irrelevant
    pub positions: Vec<PlacedRect>,
    /// Width and height of the bounding box
    pub bounding_box: (f64, f64),
    pub area: f64,
}

impl Floorplan {
    pub fn new(positions: Vec<PlacedRect>, bounding_box: (f64, f64)) -> Self {
        let area = bounding_box.0 * bounding_box.1;
        Floorplan {
            positions,
            bounding_box,
            area,
        }
    }

    /// Creates a floorplan with an explicitly given area instead of the one of its bounding box.
    pub fn with_area(positions: Vec<PlacedRect>, bounding_box: (f64, f64), area: f64) -> Self {
        Floorplan {
            positions,
            bounding_box,
            area,
        }
    }

    pub fn width(&self) -> f64 {
        self.bounding_box.0
    }

    pub fn height(&self) -> f64 {
        self.bounding_box.1
    }

    /// Placement of a specific rectangle
    pub fn position(&self, id: usize) -> Option<&PlacedRect> {
        self.positions.iter().find(|p| p.id == id)
    }

    /// Fraction of the bounding box covered by rectangles
    pub fn density(&self, instance: &RPInstance) -> f64 {
        match self.area > 0.0 {
            true => instance.total_area() / self.area,
            false => 0.0,
        }
    }

    pub fn fits(&self, limits: &SizeLimits) -> bool {
        limits.admits(self.width(), self.height())
    }
}

impl Display for Floorplan {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Floorplan({{'positions': [{}], 'bounding_box': ({}, {}), 'area': {}}})",
            self.positions.iter().join(", "),
            self.bounding_box.0,
            self.bounding_box.1,
            self.area
        )
    }
}
