use crate::error::{RPError, Result};

/// Axis-aligned rectangle to be packed.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rectangle {
    /// Position of the rectangle in the input, starting from 0
    pub id: usize,
    pub width: f64,
    pub height: f64,
    /// Whether the rectangle may be placed rotated by 90°
    pub rotatable: bool,
}

impl Rectangle {
    pub fn try_new(id: usize, width: f64, height: f64, rotatable: bool) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RPError::InvalidRectangle {
                    id,
                    reason: format!("{name} must be a positive finite number, got {value}"),
                });
            }
        }
        Ok(Rectangle {
            id,
            width,
            height,
            rotatable,
        })
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Width and height as placed, swapped when `rotated`.
    #[inline(always)]
    pub fn dims(&self, rotated: bool) -> (f64, f64) {
        match rotated {
            false => (self.width, self.height),
            true => (self.height, self.width),
        }
    }

    /// Smallest width the rectangle can present in any allowed orientation.
    pub fn min_feasible_width(&self) -> f64 {
        match self.rotatable {
            true => f64::min(self.width, self.height),
            false => self.width,
        }
    }

    /// Smallest height the rectangle can present in any allowed orientation.
    pub fn min_feasible_height(&self) -> f64 {
        match self.rotatable {
            true => f64::min(self.width, self.height),
            false => self.height,
        }
    }

    /// Largest width the rectangle can present in any allowed orientation.
    pub fn max_feasible_width(&self) -> f64 {
        match self.rotatable {
            true => f64::max(self.width, self.height),
            false => self.width,
        }
    }

    /// Largest height the rectangle can present in any allowed orientation.
    pub fn max_feasible_height(&self) -> f64 {
        match self.rotatable {
            true => f64::max(self.width, self.height),
            false => self.height,
        }
    }
}
