mod floorplan_to_svg;
pub mod svg_util;

pub use floorplan_to_svg::floorplan_to_svg;
pub use svg_util::{Color, SvgDrawOptions, SvgTheme};
