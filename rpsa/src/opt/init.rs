use crate::opt::PackingState;
use rand::Rng;
use rand::seq::SliceRandom;
use rectpack::entities::{RPInstance, Rectangle, SizeLimits};

/// Starting state of an annealing run.
///
/// * width limit only: all rectangles stacked vertically, each as narrow as possible
/// * height limit only: all rectangles in a single row, each as flat as possible
/// * otherwise: both sequences shuffled independently
pub fn initial_state(instance: &RPInstance, limits: SizeLimits, rng: &mut impl Rng) -> PackingState {
    let n = instance.n();
    let ascending = (0..n).collect::<Vec<_>>();

    let (a, b) = match (limits.width, limits.height) {
        (Some(_), None) => (ascending.clone(), ascending.iter().rev().copied().collect()),
        (None, Some(_)) => (ascending.clone(), ascending),
        _ => {
            let mut a = ascending.clone();
            let mut b = ascending;
            a.shuffle(rng);
            b.shuffle(rng);
            (a, b)
        }
    };

    let rotations = instance
        .rectangles()
        .iter()
        .map(|r| match r.rotatable && prefers_rotation(r, limits) {
            true => 1,
            false => 0,
        })
        .collect();

    PackingState { a, b, rotations }
}

fn prefers_rotation(r: &Rectangle, limits: SizeLimits) -> bool {
    match (limits.width, limits.height) {
        (None, None) => false,
        (Some(_), None) => r.width > r.height,
        (None, Some(_)) => r.height > r.width,
        (Some(w_lim), Some(h_lim)) => {
            let fits = |(w, h): (f64, f64)| w <= w_lim && h <= h_lim;
            !fits(r.dims(false)) && fits(r.dims(true))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use rectpack::io;
    use rectpack::util::assertions;

    fn instance() -> RPInstance {
        io::parse_instance(r#"[[4, 6], [4, 4], [2.1, 3.2, false], [5, 1, true], [2, 7, true]]"#).unwrap()
    }

    #[test]
    fn width_limit_starts_from_a_narrow_column() {
        let instance = instance();
        let limits = SizeLimits::new(Some(4.0), None);
        let state = initial_state(&instance, limits, &mut SmallRng::seed_from_u64(0));

        assert_eq!(state.a, vec![0, 1, 2, 3, 4]);
        assert_eq!(state.b, vec![4, 3, 2, 1, 0]);
        assert_eq!(state.rotations, vec![0, 0, 0, 1, 0]);

        let fp = rectpack::seq_pair::decode(&state.a, &state.b, &instance, Some(&state.rotations)).unwrap();
        assert!(fp.fits(&limits));
    }

    #[test]
    fn height_limit_starts_from_a_flat_row() {
        let instance = instance();
        let limits = SizeLimits::new(None, Some(6.0));
        let state = initial_state(&instance, limits, &mut SmallRng::seed_from_u64(0));

        assert_eq!(state.a, vec![0, 1, 2, 3, 4]);
        assert_eq!(state.b, vec![0, 1, 2, 3, 4]);
        assert_eq!(state.rotations, vec![0, 0, 0, 0, 1]);

        let fp = rectpack::seq_pair::decode(&state.a, &state.b, &instance, Some(&state.rotations)).unwrap();
        assert!(fp.fits(&limits));
    }

    #[test]
    fn unconstrained_start_is_shuffled() {
        let instance = instance();
        let state = initial_state(&instance, SizeLimits::NONE, &mut SmallRng::seed_from_u64(0));
        assert!(assertions::is_permutation(&state.a));
        assert!(assertions::is_permutation(&state.b));
        assert_eq!(state.rotations, vec![0; 5]);
    }

    #[test]
    fn both_limits_rotate_only_when_it_helps() {
        let instance = instance();
        let limits = SizeLimits::new(Some(7.0), Some(6.5));
        let state = initial_state(&instance, limits, &mut SmallRng::seed_from_u64(0));
        // [2, 7] is too tall unrotated, [5, 1] fits either way
        assert_eq!(state.rotations, vec![0, 0, 0, 0, 1]);
    }
}
