use crate::entities::{Floorplan, PlacedRect, RPInstance};
use crate::error::{RPError, Result};
use crate::seq_pair::{ConstraintGraph, GridCoord};
use crate::util::assertions;

/// Oblique grid coordinates of every rectangle, indexed by rectangle id.
/// Uses an inverse index, so runs in O(n). `a` and `b` must be permutations of `0..n`.
pub fn grid_coordinates(a: &[usize], b: &[usize]) -> Vec<GridCoord> {
    debug_assert!(assertions::is_permutation(a) && assertions::is_permutation(b));
    let mut coords = vec![GridCoord { a: 0, b: 0 }; a.len()];
    for (idx, &id) in a.iter().enumerate() {
        coords[id].a = idx;
    }
    for (idx, &id) in b.iter().enumerate() {
        coords[id].b = idx;
    }
    coords
}

/// Decodes a pair of permutations (and optional rotation flags) into a [`Floorplan`].
///
/// The horizontal and vertical positions follow from the longest paths in two constraint graphs:
/// * `i` lies left of `j` if `i` precedes `j` in both sequences
/// * `i` lies below `j` if `i` follows `j` in the first sequence but precedes it in the second
///
/// Runs in O(n²), this is the hot path of any optimization built on top of it.
pub fn decode(
    a: &[usize],
    b: &[usize],
    instance: &RPInstance,
    rotations: Option<&[usize]>,
) -> Result<Floorplan> {
    let n = instance.n();
    if a.len() != n || b.len() != n {
        return Err(RPError::InvalidSequencePair(format!(
            "sequence lengths ({}, {}) do not match the number of rectangles ({n})",
            a.len(),
            b.len()
        )));
    }
    if !assertions::is_permutation(a) || !assertions::is_permutation(b) {
        return Err(RPError::InvalidSequencePair(format!(
            "both sequences must be permutations of 0..{n}"
        )));
    }
    if let Some(rotations) = rotations {
        if rotations.len() != n {
            return Err(RPError::InvalidSequencePair(format!(
                "rotation vector length ({}) does not match the number of rectangles ({n})",
                rotations.len()
            )));
        }
    }

    //effective dimensions of every rectangle
    let mut widths = Vec::with_capacity(n);
    let mut heights = Vec::with_capacity(n);
    for rect in instance.rectangles() {
        let rotated = rotations.is_some_and(|r| r[rect.id] % 2 == 1);
        if rotated && !rect.rotatable {
            return Err(RPError::InvalidRotation { id: rect.id });
        }
        let (w, h) = rect.dims(rotated);
        widths.push(w);
        heights.push(h);
    }

    let coords = grid_coordinates(a, b);

    let graph_h = ConstraintGraph::build(n, |i, j| {
        coords[i].a < coords[j].a && coords[i].b < coords[j].b
    });
    let dist_h = graph_h.longest_paths(&widths);

    let graph_v = ConstraintGraph::build(n, |i, j| {
        coords[i].a > coords[j].a && coords[i].b < coords[j].b
    });
    let dist_v = graph_v.longest_paths(&heights);

    let bb_width = dist_h.iter().copied().fold(0.0, f64::max);
    let bb_height = dist_v.iter().copied().fold(0.0, f64::max);

    let positions = (0..n)
        .map(|i| PlacedRect {
            id: i,
            x: dist_h[i] - widths[i],
            y: dist_v[i] - heights[i],
            width: widths[i],
            height: heights[i],
        })
        .collect();

    let floorplan = Floorplan::new(positions, (bb_width, bb_height));

    debug_assert!(assertions::floorplan_is_overlap_free(&floorplan));
    debug_assert!(assertions::floorplan_within_bounding_box(&floorplan));

    Ok(floorplan)
}
