use mutant_core::classifier::{Classifier, ClassifierSettings, Direction, DirectionSet, Grid};
use mutant_core::constants::DNA_ALPHABET;
use mutant_core::errors::ShapeError;
use proptest::prelude::*;

/// Runs counted from every cell along right, down, down-right and up-right.
fn count_with_up_right(grid: &Grid, run_length: usize) -> usize {
    let up_right = Direction { d_row: -1, d_col: 1 };
    let vectors = [Direction::RIGHT, Direction::DOWN, Direction::DOWN_RIGHT, up_right];
    let n = grid.dim();
    let mut found = 0;
    for row in 0..n {
        for col in 0..n {
            let Some(symbol) = grid.get(row, col) else { continue };
            for dir in vectors {
                let run = (1..run_length).all(|steps| {
                    dir.step(row, col, steps)
                        .and_then(|(r, c)| grid.get(r, c))
                        .is_some_and(|s| s == symbol)
                });
                if run {
                    found += 1;
                }
            }
        }
    }
    found
}

/// Square grid over the DNA alphabet with side length in `sizes`.
fn square_grid(sizes: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<String>> {
    sizes.prop_flat_map(|n| {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(DNA_ALPHABET.to_vec()), n)
                .prop_map(|row| row.into_iter().collect::<String>()),
            n,
        )
    })
}

proptest! {
    #[test]
    fn small_square_grids_are_never_mutant(rows in square_grid(1..=3)) {
        prop_assert_eq!(Classifier::default().classify(&rows), Ok(false));
    }

    #[test]
    fn non_square_grids_always_fail(
        n in 1usize..8,
        extra in 1usize..4,
        bad_row in 0usize..8,
    ) {
        let bad_row = bad_row % n;
        let mut rows = vec!["A".repeat(n); n];
        rows[bad_row] = "A".repeat(n + extra);
        let result = Classifier::default().classify(&rows);
        let is_not_square = matches!(result, Err(ShapeError::NotSquare { .. }));
        prop_assert!(is_not_square);
    }

    #[test]
    fn classify_is_deterministic(rows in square_grid(1..=8)) {
        let c = Classifier::default();
        prop_assert_eq!(c.classify(&rows), c.classify(&rows));
    }

    #[test]
    fn full_directions_transpose_invariant(rows in square_grid(1..=8)) {
        let c = Classifier::default();
        let grid = Grid::validate(&rows).unwrap();
        prop_assert_eq!(
            c.count_runs(&grid, usize::MAX),
            c.count_runs(&grid.transpose(), usize::MAX)
        );
    }

    #[test]
    fn verdict_matches_full_count(rows in square_grid(1..=8), quota in 1usize..5) {
        for directions in [DirectionSet::Full, DirectionSet::Legacy] {
            let c = Classifier::new(ClassifierSettings { quota, directions, ..Default::default() });
            let grid = Grid::validate(&rows).unwrap();
            let total = c.count_runs(&grid, usize::MAX);
            prop_assert_eq!(c.classify_grid(&grid), total >= quota);
        }
    }

    #[test]
    fn early_exit_never_overshoots(rows in square_grid(1..=8), limit in 0usize..6) {
        let c = Classifier::default();
        let grid = Grid::validate(&rows).unwrap();
        let total = c.count_runs(&grid, usize::MAX);
        prop_assert_eq!(c.count_runs(&grid, limit), total.min(limit));
    }

    #[test]
    fn full_count_matches_up_right_scan(rows in square_grid(1..=8), run_length in 2usize..5) {
        let c = Classifier::new(ClassifierSettings { run_length, ..Default::default() });
        let grid = Grid::validate(&rows).unwrap();
        prop_assert_eq!(
            c.count_runs(&grid, usize::MAX),
            count_with_up_right(&grid, run_length)
        );
    }
}
