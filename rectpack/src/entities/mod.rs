mod floorplan;
mod instance;
mod limits;
mod rectangle;
mod solution;

#[doc(inline)]
pub use floorplan::Floorplan;
#[doc(inline)]
pub use floorplan::PlacedRect;
#[doc(inline)]
pub use instance::RPInstance;
#[doc(inline)]
pub use limits::SizeLimits;
#[doc(inline)]
pub use rectangle::Rectangle;
#[doc(inline)]
pub use solution::Solution;
