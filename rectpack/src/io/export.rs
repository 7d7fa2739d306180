use crate::entities::{Floorplan, RPInstance, Solution};
use crate::io::ext_repr::{ExtFloorplan, ExtPlacedRect, ExtSequencePair, ExtSolution};

/// Exports a solution out of the library
pub fn export_solution(solution: &Solution, instance: &RPInstance) -> ExtSolution {
    ExtSolution {
        sequence_pair: ExtSequencePair {
            a: solution.sequence_pair.a().to_vec(),
            b: solution.sequence_pair.b().to_vec(),
        },
        rotations: solution.rotations.clone(),
        floorplan: export_floorplan(&solution.floorplan, instance, &solution.rotations),
    }
}

pub fn export_floorplan(floorplan: &Floorplan, instance: &RPInstance, rotations: &[usize]) -> ExtFloorplan {
    let mut positions = floorplan
        .positions
        .iter()
        .map(|p| ExtPlacedRect {
            id: p.id,
            x: p.x,
            y: p.y,
            width: p.width,
            height: p.height,
            rotated: rotations.get(p.id).is_some_and(|r| r % 2 == 1),
        })
        .collect::<Vec<_>>();
    positions.sort_by_key(|p| p.id);

    ExtFloorplan {
        positions,
        bounding_box: floorplan.bounding_box,
        area: floorplan.area,
        density: floorplan.density(instance),
    }
}
