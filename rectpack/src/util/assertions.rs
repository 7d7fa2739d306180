use crate::entities::{Floorplan, Rectangle};
use crate::util::FPA;
use log::error;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn instance_rect_ids_correct(rects: &[Rectangle]) -> bool {
    rects.iter().enumerate().all(|(i, r)| r.id == i)
}

/// Whether `seq` contains every number of `0..seq.len()` exactly once
pub fn is_permutation(seq: &[usize]) -> bool {
    let mut seen = vec![false; seq.len()];
    for &id in seq {
        match seen.get_mut(id) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}

pub fn floorplan_is_overlap_free(floorplan: &Floorplan) -> bool {
    let positions = &floorplan.positions;
    for (i, p1) in positions.iter().enumerate() {
        for p2 in &positions[i + 1..] {
            if p1.almost_overlaps(p2) {
                error!("rectangles {} and {} overlap: {p1} and {p2}", p1.id, p2.id);
                return false;
            }
        }
    }
    true
}

pub fn floorplan_within_bounding_box(floorplan: &Floorplan) -> bool {
    let (w, h) = floorplan.bounding_box;
    floorplan.positions.iter().all(|p| {
        FPA(p.x) >= FPA(0.0)
            && FPA(p.y) >= FPA(0.0)
            && FPA(p.x_max()) <= FPA(w)
            && FPA(p.y_max()) <= FPA(h)
    })
}

/// Whether the area of the floorplan equals the area of its bounding box
pub fn floorplan_area_consistent(floorplan: &Floorplan) -> bool {
    let (w, h) = floorplan.bounding_box;
    floorplan.area == w * h
}
