use ndarray::{Array2, ArrayD};

use cellgrid::rules::{self, GameOfLife};
use cellgrid::{Engine, Grid};

/// A horizontal blinker in the middle of a 5x5 grid.
fn blinker_row() -> ArrayD<f64> {
    Array2::from_shape_fn((5, 5), |(y, x)| {
        if y == 2 && (1..=3).contains(&x) {
            1.0
        } else {
            0.0
        }
    })
    .into_dyn()
}

/// The same blinker a quarter turn later.
fn blinker_column() -> ArrayD<f64> {
    Array2::from_shape_fn((5, 5), |(y, x)| {
        if x == 2 && (1..=3).contains(&y) {
            1.0
        } else {
            0.0
        }
    })
    .into_dyn()
}

/// A glider in the top-left corner of an 8x8 grid.
fn glider() -> ArrayD<f64> {
    let live = [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]];
    Array2::from_shape_fn((8, 8), |(y, x)| {
        if live.contains(&[y, x]) {
            1.0
        } else {
            0.0
        }
    })
    .into_dyn()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_oscillates() {
        let mut engine = Engine::new(blinker_row(), GameOfLife::default()).unwrap();

        let (step, grid) = engine.step();
        assert_eq!(step, 0);
        assert_eq!(grid, blinker_column());

        let (step, grid) = engine.step();
        assert_eq!(step, 1);
        assert_eq!(grid, blinker_row());
    }

    #[test]
    fn blinker_oscillates_under_chain() {
        let mut engine = Engine::new(blinker_row(), rules::life_chain()).unwrap();

        assert_eq!(engine.step().1, blinker_column());
        assert_eq!(engine.step().1, blinker_row());
    }

    #[test]
    fn chain_and_stateful_rule_agree() {
        let mut chained = Engine::new(glider(), rules::life_chain()).unwrap();
        let mut stateful = Engine::new(glider(), GameOfLife::default()).unwrap();

        for _ in 0..8 {
            let expected = stateful.step().1.to_owned();
            assert_eq!(chained.step().1, expected);
        }
    }

    #[test]
    fn maze_block_is_still_life() {
        let block = Array2::from_shape_fn((6, 6), |(y, x)| {
            if (2..=3).contains(&y) && (2..=3).contains(&x) {
                1.0
            } else {
                0.0
            }
        })
        .into_dyn();

        let mut engine = Engine::new(block.clone(), GameOfLife::maze()).unwrap();
        assert_eq!(engine.step().1, block);
    }

    #[test]
    fn maze_lone_cell_dies() {
        let lone = Grid::from_coords(&[5, 5], vec![(vec![2, 2], 1.0)]);

        let mut engine = Engine::new(lone, GameOfLife::maze()).unwrap();
        let (_, grid) = engine.step();
        assert!(grid.iter().all(|&cell| cell == 0.0));
    }
}
