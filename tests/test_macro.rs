//! Tests for the kmap! macro

use karnaugh_logic::{find_groups, kmap, Grid, VariableCount};

#[test]
fn test_kmap_rows() {
    let grid = kmap![[1, 1], [0, 0]];
    assert_eq!(grid, Grid::from_rows(&[[1, 1], [0, 0]]).unwrap());

    let grid = kmap![[1, 0], [1, 0], [0, 0], [0, 1]];
    assert_eq!(grid.variable_count(), VariableCount::Three);
    assert_eq!(grid.ones(), 3);

    let grid = kmap![
        [1, 0, 0, 1],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [1, 0, 0, 1],
    ];
    assert_eq!(find_groups(&grid).len(), 1);
}

#[test]
fn test_kmap_minterms() {
    let grid = kmap!(4 => [0, 2, 8, 10]);
    assert_eq!(grid, Grid::from_minterms(4, &[0, 2, 8, 10]).unwrap());

    let grid = kmap!(3 => [7]);
    assert_eq!(grid.value_at(3, 1), Some(true));

    let empty = kmap!(2 => []);
    assert_eq!(empty.ones(), 0);
}
