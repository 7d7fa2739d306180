use crate::util::FPA;

/// Optional upper bounds on the dimensions of the bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeLimits {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl SizeLimits {
    pub const NONE: SizeLimits = SizeLimits {
        width: None,
        height: None,
    };

    pub fn new(width: Option<f64>, height: Option<f64>) -> Self {
        SizeLimits { width, height }
    }

    pub fn is_unbounded(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Whether a bounding box of `width` x `height` respects both limits (with float tolerance).
    pub fn admits(&self, width: f64, height: f64) -> bool {
        let w_ok = self.width.is_none_or(|lim| FPA(width) <= FPA(lim));
        let h_ok = self.height.is_none_or(|lim| FPA(height) <= FPA(lim));
        w_ok && h_ok
    }
}
