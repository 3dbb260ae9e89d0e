//! Tests for the grid module

use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;

const ALL_COUNTS: [usize; 3] = [2, 3, 4];

#[test]
fn test_generated_dimensions() {
    let expected = [(2, 2, 2), (3, 4, 2), (4, 4, 4)];
    for (vc, rows, cols) in expected {
        let grid = generate_grid(vc, true).unwrap();
        assert_eq!(grid.rows(), rows);
        assert_eq!(grid.cols(), cols);
        assert_eq!(grid.cells().count(), rows * cols);
        assert_eq!(grid.variable_count().get(), vc);
    }
}

#[test]
fn test_unsupported_variable_counts_are_rejected() {
    for bad in [0, 1, 5, 8] {
        let err = generate_grid(bad, true).unwrap_err();
        assert!(matches!(err, KarnaughError::InvalidArgument { variable_count } if variable_count == bad));
    }
}

#[test]
fn test_minterms_are_a_permutation() {
    for vc in ALL_COUNTS {
        for order in [MintermOrder::Positional, MintermOrder::GrayCode] {
            let config = KarnaughConfig {
                minterm_order: order,
                ..Default::default()
            };
            let grid = generate_grid_with(vc, false, &config).unwrap();
            let minterms: Vec<u32> = grid.cells().map(Cell::minterm).collect();
            let unique: BTreeSet<u32> = minterms.iter().copied().collect();
            assert_eq!(minterms.len(), unique.len());
            assert_eq!(unique, (0..(1u32 << vc)).collect::<BTreeSet<_>>());
        }
    }
}

#[test]
fn test_positional_minterm_formula() {
    let three = generate_grid(3, false).unwrap();
    for cell in three.cells() {
        assert_eq!(cell.minterm() as usize, cell.row_index() * 2 + cell.col_index());
    }
    let four = generate_grid(4, false).unwrap();
    for cell in four.cells() {
        assert_eq!(cell.minterm() as usize, cell.row_index() * 4 + cell.col_index());
    }
}

#[test]
fn test_gray_labels_on_cells() {
    let grid = generate_grid(4, false).unwrap();
    let cell = grid.cell(2, 3).unwrap();
    assert_eq!(cell.gray_row(), "11");
    assert_eq!(cell.gray_col(), "10");

    let grid = generate_grid(3, false).unwrap();
    let cell = grid.cell(3, 1).unwrap();
    assert_eq!(cell.gray_row(), "10");
    assert_eq!(cell.gray_col(), "1");
}

#[test]
fn test_unrandomized_grid_is_all_zero() {
    for vc in ALL_COUNTS {
        assert_eq!(generate_grid(vc, false).unwrap().ones(), 0);
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let config = KarnaughConfig::default();
    let mut rng1 = ChaCha8Rng::seed_from_u64(7);
    let mut rng2 = ChaCha8Rng::seed_from_u64(7);
    let a = generate_grid_with_rng(4, &config, &mut rng1).unwrap();
    let b = generate_grid_with_rng(4, &config, &mut rng2).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_generation_produces_both_values() {
    // 32 seeds × 16 cells: all-equal outcomes are vanishingly unlikely
    let config = KarnaughConfig::default();
    let mut ones = 0;
    let mut total = 0;
    for seed in 0..32 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generate_grid_with_rng(4, &config, &mut rng).unwrap();
        ones += grid.ones();
        total += 16;
    }
    assert!(ones > 0 && ones < total);
}

#[test]
fn test_toggle_flips_only_the_target() {
    let grid = Grid::from_rows(&[[0, 1], [1, 0]]).unwrap();
    let toggled = toggle_cell(&grid, 0, 0).unwrap();
    assert_eq!(toggled.value_at(0, 0), Some(true));
    for (before, after) in grid.cells().zip(toggled.cells()).skip(1) {
        assert_eq!(before, after);
    }
    // Input snapshot is untouched
    assert_eq!(grid.value_at(0, 0), Some(false));
}

#[test]
fn test_double_toggle_restores_grid() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let grid = generate_grid_with_rng(4, &KarnaughConfig::default(), &mut rng).unwrap();
    for row in 0..4 {
        for col in 0..4 {
            let once = toggle_cell(&grid, row, col).unwrap();
            assert_ne!(once, grid);
            let twice = toggle_cell(&once, row, col).unwrap();
            assert_eq!(twice, grid);
        }
    }
}

#[test]
fn test_toggle_out_of_bounds() {
    let grid = generate_grid(3, false).unwrap();
    for (row, col) in [(-1, 0), (0, -1), (4, 0), (0, 2), (isize::MAX, 0)] {
        let err = toggle_cell(&grid, row, col).unwrap_err();
        assert!(matches!(
            err,
            KarnaughError::OutOfBounds { rows: 4, cols: 2, .. }
        ));
    }
}

#[test]
fn test_from_rows_selects_layout() {
    let grid = Grid::from_rows(&[[1, 0], [0, 1], [1, 1], [0, 0]]).unwrap();
    assert_eq!(grid.variable_count(), VariableCount::Three);
    assert_eq!(grid.ones(), 4);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(matches!(
        Grid::from_rows(&[[1, 0, 1], [0, 1, 1]]),
        Err(KarnaughError::InvalidRows { .. })
    ));
    assert!(matches!(
        Grid::from_rows(&[vec![1, 0], vec![0]]),
        Err(KarnaughError::InvalidRows { .. })
    ));
    assert!(matches!(
        Grid::from_rows(&[[2, 0], [0, 1]]),
        Err(KarnaughError::InvalidRows { .. })
    ));
    let empty: [[u8; 0]; 0] = [];
    assert!(Grid::from_rows(&empty).is_err());
}

#[test]
fn test_from_minterms() {
    let grid = Grid::from_minterms(3, &[0, 7]).unwrap();
    assert_eq!(grid.minterms(), vec![0, 7]);
    assert_eq!(grid.value_at(0, 0), Some(true));
    assert_eq!(grid.value_at(3, 1), Some(true));

    let err = Grid::from_minterms(2, &[4]).unwrap_err();
    assert!(matches!(
        err,
        KarnaughError::InvalidMinterm {
            minterm: 4,
            variable_count: 2
        }
    ));
}

#[test]
fn test_from_minterms_with_gray_numbering() {
    let config = KarnaughConfig {
        minterm_order: MintermOrder::GrayCode,
        ..Default::default()
    };
    // 1110 sits at row "11" (2), column "10" (3)
    let grid = Grid::from_minterms_with(4, &[14], &config).unwrap();
    assert_eq!(grid.value_at(2, 3), Some(true));
    assert_eq!(grid.ones(), 1);
}

#[test]
fn test_from_bits_pads_and_truncates() {
    let grid = Grid::from_bits(VariableCount::Two, &[1]);
    assert_eq!(grid.ones(), 1);
    let grid = Grid::from_bits(VariableCount::Two, &[1, 1, 1, 1, 1, 1]);
    assert_eq!(grid.ones(), 4);
}

#[test]
fn test_with_value() {
    let grid = generate_grid(2, false).unwrap();
    let set = grid.with_value(1, 1, true).unwrap();
    assert_eq!(set.value_at(1, 1), Some(true));
    let unchanged = set.with_value(1, 1, true).unwrap();
    assert_eq!(unchanged, set);
    assert!(grid.with_value(2, 0, true).is_err());
}

#[test]
fn test_truth_table_order() {
    let grid = Grid::from_rows(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 1], [0, 0, 0, 0]]).unwrap();
    let table = grid.truth_table();
    assert_eq!(table.len(), 16);
    // The single 1 is at AB=11, CD=10 -> combination 14
    let on: Vec<usize> = table
        .iter()
        .enumerate()
        .filter(|(_, row)| row.value)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(on, vec![14]);
    assert_eq!(table[14].inputs, vec![true, true, true, false]);
    // Positional label of (2, 3)
    assert_eq!(table[14].minterm, 11);
}

#[test]
fn test_display_four_variables() {
    let grid = Grid::from_minterms(4, &[0, 15]).unwrap();
    let expected = "AB\\CD 00 01 11 10\n   00  1  0  0  0\n   01  0  0  0  0\n   11  0  0  0  0\n   10  0  0  0  1";
    assert_eq!(grid.to_string(), expected);
}

#[test]
fn test_display_three_variables() {
    let grid = Grid::from_rows(&[[1, 0], [0, 0], [0, 0], [0, 1]]).unwrap();
    let expected = "AB\\C 0 1\n  00 1 0\n  01 0 0\n  11 0 0\n  10 0 1";
    assert_eq!(grid.to_string(), expected);
}
