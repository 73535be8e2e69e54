use conway::{Conway, CoroutineEngine, Engine, Grid, regenerate, seeded_grid};

const SEED: u64 = 42;

fn assert_grids_equal(plain: &Grid, coro: &Grid) {
    assert_eq!(plain.side(), coro.side());
    if plain == coro {
        return;
    }
    let index = plain
        .cells()
        .iter()
        .zip(coro.cells())
        .position(|(a, b)| a != b)
        .unwrap_or_default();
    let (row, col) = plain.position(index);
    panic!("Mismatch at ({row}, {col}):\nplain\n{plain}coroutine\n{coro}");
}

#[test]
fn coroutine_engine_matches_plain_engine() {
    let coro = CoroutineEngine::new().unwrap();
    for side in [1, 2, 3, 17, 40] {
        let mut plain_grid = seeded_grid(side, 0.35, SEED + side as u64);
        let mut coro_grid = plain_grid.clone();
        for _ in 0..12 {
            plain_grid = Conway.regenerate(&plain_grid);
            coro_grid = coro.regenerate(&coro_grid);
            assert_grids_equal(&plain_grid, &coro_grid);
        }
    }
}

#[test]
fn glider_stalls_into_a_block_at_the_corner() {
    // No wraparound: a glider heading for the bottom-right corner of a 6x6
    // grid ends as a still block instead of reappearing at the top-left.
    let mut grid = Grid::from_states(&[
        0, 1, 0, 0, 0, 0,
        0, 0, 1, 0, 0, 0,
        1, 1, 1, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
    ])
    .unwrap();
    for _ in 0..40 {
        grid = regenerate(&grid);
    }
    let block = Grid::from_states(&[
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 1, 1,
        0, 0, 0, 0, 1, 1,
    ])
    .unwrap();
    assert_eq!(grid, block);
    assert_eq!(regenerate(&grid), block);
}

#[test]
fn regenerate_keeps_the_length() {
    for side in 0..6 {
        let grid = seeded_grid(side, 0.5, SEED);
        assert_eq!(regenerate(&grid).len(), side * side);
    }
}
