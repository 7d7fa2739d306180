#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::prelude::{SliceRandom, SmallRng};
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use rectpack::entities::{RPInstance, Solution};
    use rectpack::io;
    use rectpack::io::ext_repr::ExtRectangle;
    use rectpack::seq_pair::{SequencePair, decode};
    use rectpack::util::assertions;
    use rectpack::{RPError, Result};

    const EXAMPLE: &str = include_str!("../../assets/example.json");

    fn example_instance() -> RPInstance {
        io::parse_instance(EXAMPLE).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            approx_eq!(f64, actual, expected, epsilon = 1e-9),
            "{actual} != {expected}"
        );
    }

    fn shuffled(n: usize, rng: &mut impl Rng) -> Vec<usize> {
        let mut seq: Vec<usize> = (0..n).collect();
        seq.shuffle(rng);
        seq
    }

    #[test]
    fn horizontal_pair_forms_a_row() {
        let instance = example_instance();
        let fp = decode(&[0, 1, 2, 3], &[0, 1, 2, 3], &instance, None).unwrap();

        assert_close(fp.width(), 11.1);
        assert_close(fp.height(), 6.0);
        assert_close(fp.area, 66.6);
        for (id, x) in [(0, 0.0), (1, 4.0), (2, 8.0), (3, 10.1)] {
            let p = fp.position(id).unwrap();
            assert_close(p.x, x);
            assert_close(p.y, 0.0);
        }
    }

    #[test]
    fn vertical_pair_forms_a_column() {
        let instance = example_instance();
        let fp = decode(&[0, 1, 2, 3], &[3, 2, 1, 0], &instance, None).unwrap();

        assert_close(fp.width(), 4.0);
        assert_close(fp.height(), 18.2);
        for (id, y) in [(0, 12.2), (1, 8.2), (2, 5.0), (3, 0.0)] {
            let p = fp.position(id).unwrap();
            assert_close(p.x, 0.0);
            assert_close(p.y, y);
        }
    }

    #[test]
    fn mixed_pair_with_rotation() {
        let instance = example_instance();
        let sp = SequencePair::new(vec![0, 1, 3, 2], vec![3, 0, 2, 1]).unwrap();
        let fp = sp.decode(&instance, Some(&[0, 0, 0, 1])).unwrap();

        assert_close(fp.width(), 8.0);
        assert_close(fp.height(), 7.2);
        assert_close(fp.area, 57.6);
        for (id, x, y, w, h) in [
            (0, 0.0, 1.0, 4.0, 6.0),
            (1, 4.0, 3.2, 4.0, 4.0),
            (2, 5.0, 0.0, 2.1, 3.2),
            (3, 0.0, 0.0, 5.0, 1.0),
        ] {
            let p = fp.position(id).unwrap();
            assert_close(p.x, x);
            assert_close(p.y, y);
            assert_close(p.width, w);
            assert_close(p.height, h);
        }

        let solution = Solution::new(sp, vec![0, 0, 0, 1], fp.clone());
        assert!(solution.is_rotated(3));
        assert_eq!(solution.redecode(&instance).unwrap(), fp);
    }

    #[test_case(&[1, 0, 0, 0], 0; "fixed rectangle 0")]
    #[test_case(&[0, 0, 3, 0], 2; "fixed rectangle 2, odd flag")]
    fn rotating_a_fixed_rectangle_is_rejected(rotations: &[usize], id: usize) {
        let instance = example_instance();
        let result = decode(&[0, 1, 2, 3], &[0, 1, 2, 3], &instance, Some(rotations));
        assert_eq!(result, Err(RPError::InvalidRotation { id }));
    }

    #[test]
    fn even_rotation_flags_are_not_rotations() {
        let instance = example_instance();
        let plain = decode(&[0, 1, 2, 3], &[0, 1, 2, 3], &instance, None).unwrap();
        let even = decode(&[0, 1, 2, 3], &[0, 1, 2, 3], &instance, Some(&[2, 4, 0, 2])).unwrap();
        assert_eq!(plain, even);
    }

    #[test_case(&[0, 1, 2], &[0, 1, 2]; "too short")]
    #[test_case(&[0, 1, 2, 2], &[0, 1, 2, 3]; "duplicate")]
    #[test_case(&[0, 1, 2, 4], &[0, 1, 2, 3]; "out of range")]
    fn malformed_pairs_are_rejected(a: &[usize], b: &[usize]) {
        let instance = example_instance();
        assert!(matches!(
            decode(a, b, &instance, None),
            Err(RPError::InvalidSequencePair(_))
        ));
    }

    #[test]
    fn wrong_rotation_length_is_rejected() {
        let instance = example_instance();
        assert!(matches!(
            decode(&[0, 1, 2, 3], &[0, 1, 2, 3], &instance, Some(&[0, 0])),
            Err(RPError::InvalidSequencePair(_))
        ));
    }

    #[test_case(4; "4 rectangles")]
    #[test_case(10; "10 rectangles")]
    #[test_case(25; "25 rectangles")]
    fn random_pairs_decode_to_valid_floorplans(n: usize) -> Result<()> {
        let ext_instance = (0..n)
            .map(|i| {
                ExtRectangle::RotatableTuple(
                    1.0 + (i * 7 % 5) as f64 * 0.7,
                    1.0 + (i * 3 % 4) as f64 * 1.3,
                    i % 2 == 0,
                )
            })
            .collect::<Vec<_>>();
        let instance = io::import(&ext_instance)?;
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..50 {
            let a = shuffled(n, &mut rng);
            let b = shuffled(n, &mut rng);
            let rotations = (0..n)
                .map(|i| match instance.rectangle(i).rotatable {
                    true => rng.random_range(0..4),
                    false => 0,
                })
                .collect::<Vec<_>>();
            let fp = decode(&a, &b, &instance, Some(&rotations))?;

            assert!(assertions::floorplan_is_overlap_free(&fp));
            assert!(assertions::floorplan_within_bounding_box(&fp));
            assert_close(fp.area, fp.width() * fp.height());
            assert!(fp.area + 1e-9 >= instance.total_area());
        }
        Ok(())
    }

    #[test]
    fn encode_inverts_the_oblique_grid() {
        let mut rng = SmallRng::seed_from_u64(7);
        for n in [1, 2, 5, 12] {
            let sp = SequencePair::new(shuffled(n, &mut rng), shuffled(n, &mut rng)).unwrap();
            let encoded = SequencePair::encode(sp.oblique_grid());
            assert_eq!(encoded, sp);
        }
    }

    #[test]
    fn empty_instance_decodes_to_empty_floorplan() {
        let instance = io::parse_instance("[]").unwrap();
        let fp = decode(&[], &[], &instance, None).unwrap();
        assert!(fp.positions.is_empty());
        assert_eq!(fp.bounding_box, (0.0, 0.0));
        assert_eq!(fp.area, 0.0);
    }

    #[test]
    fn export_carries_rotation_and_density() {
        let instance = example_instance();
        let sp = SequencePair::new(vec![0, 1, 3, 2], vec![3, 0, 2, 1]).unwrap();
        let fp = sp.decode(&instance, Some(&[0, 0, 0, 1])).unwrap();
        let solution = Solution::new(sp, vec![0, 0, 0, 1], fp);

        let ext = io::export_solution(&solution, &instance);
        assert_eq!(ext.sequence_pair.a, vec![0, 1, 3, 2]);
        assert_eq!(ext.sequence_pair.b, vec![3, 0, 2, 1]);
        assert!(ext.floorplan.positions[3].rotated);
        assert!(!ext.floorplan.positions[0].rotated);
        assert_close(ext.floorplan.density, instance.total_area() / 57.6);

        let json = serde_json::to_string(&ext).unwrap();
        assert!(json.contains("\"bounding_box\":[8.0,7.2"));
    }
}
