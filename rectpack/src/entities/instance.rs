use crate::entities::Rectangle;
use crate::error::{Axis, RPError, Result};
use crate::util::assertions;
use itertools::Itertools;

/// The static (unmodifiable) set of rectangles to be packed.
#[derive(Debug, Clone, PartialEq)]
pub struct RPInstance {
    rectangles: Vec<Rectangle>,
}

impl RPInstance {
    /// Creates a new instance, rectangle ids must be consecutive starting from 0.
    pub fn new(rectangles: Vec<Rectangle>) -> Result<Self> {
        if !assertions::instance_rect_ids_correct(&rectangles) {
            return Err(RPError::InvalidInput(format!(
                "rectangle ids should be consecutive starting from 0, ids: {:?}",
                rectangles.iter().map(|r| r.id).collect_vec()
            )));
        }
        Ok(RPInstance { rectangles })
    }

    /// Number of rectangles
    pub fn n(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn rectangle(&self, id: usize) -> &Rectangle {
        &self.rectangles[id]
    }

    pub fn total_area(&self) -> f64 {
        self.rectangles.iter().map(|r| r.area()).sum()
    }

    /// Width of the widest rectangle when every rectangle is oriented to be as narrow as possible.
    /// No floorplan can be narrower than this.
    pub fn min_feasible_width(&self) -> f64 {
        self.rectangles
            .iter()
            .map(|r| r.min_feasible_width())
            .fold(0.0, f64::max)
    }

    /// Height of the tallest rectangle when every rectangle is oriented to be as flat as possible.
    pub fn min_feasible_height(&self) -> f64 {
        self.rectangles
            .iter()
            .map(|r| r.min_feasible_height())
            .fold(0.0, f64::max)
    }

    /// Loose upper bound on the area of any floorplan of this instance.
    /// Only used to scale penalties, it is not a tight bound.
    pub fn max_possible_area(&self) -> f64 {
        let width_sum: f64 = self.rectangles.iter().map(|r| r.max_feasible_width()).sum();
        let height_sum: f64 = self.rectangles.iter().map(|r| r.max_feasible_height()).sum();
        width_sum * height_sum
    }

    /// Checks whether the given limits can be met by at least every individual rectangle.
    pub fn check_limits(&self, width_limit: Option<f64>, height_limit: Option<f64>) -> Result<()> {
        let checks = [
            (Axis::Width, width_limit, self.min_feasible_width()),
            (Axis::Height, height_limit, self.min_feasible_height()),
        ];
        for (axis, limit, minimum) in checks {
            if let Some(limit) = limit {
                if limit.is_nan() || limit < minimum {
                    return Err(RPError::LimitBelowMinimum {
                        axis,
                        limit,
                        minimum,
                    });
                }
            }
        }
        Ok(())
    }
}
