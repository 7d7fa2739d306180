use crate::entities::{RPInstance, Rectangle};
use crate::error::{RPError, Result};
use crate::io::ext_repr::{ExtInstance, ExtRectangle};
use itertools::Itertools;

/// Imports an instance into the library, ids are assigned in input order.
pub fn import(ext_rects: &[ExtRectangle]) -> Result<RPInstance> {
    let rectangles = ext_rects
        .iter()
        .enumerate()
        .map(|(id, ext)| {
            let (width, height, rotatable) = ext.parts();
            Rectangle::try_new(id, width, height, rotatable)
        })
        .collect::<Result<Vec<Rectangle>>>()?;

    RPInstance::new(rectangles)
}

/// Parses the JSON representation of an instance, without validating the rectangles.
pub fn parse_ext_instance(json: &str) -> Result<ExtInstance> {
    serde_json::from_str(json).map_err(|e| {
        RPError::InvalidInput(format!(
            "expected a list of [width, height(, rotatable)] or {{width, height(, rotatable)}} entries: {e}"
        ))
    })
}

/// Parses and validates the JSON representation of an instance.
pub fn parse_instance(json: &str) -> Result<RPInstance> {
    import(&parse_ext_instance(json)?)
}

/// Converts an instance back into its external representation.
pub fn to_ext_instance(instance: &RPInstance) -> ExtInstance {
    instance
        .rectangles()
        .iter()
        .map(|r| ExtRectangle::Record {
            width: r.width,
            height: r.height,
            rotatable: r.rotatable,
        })
        .collect_vec()
}
