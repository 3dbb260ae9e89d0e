//! Adjacency grouping of 1-cells
//!
//! Groups are the connected components of a map's 1-cells under 4-neighbour
//! adjacency. Neighbours are found with modular arithmetic, so every map is a
//! torus: the top row touches the bottom row and the left column touches the
//! right column, whatever the variable count.
//!
//! Components are not constrained to power-of-two rectangles. An irregular
//! component still produces a group; [`Group::is_implicant`] tells whether it
//! is a valid product term on its own.

use crate::grid::Grid;
use crate::layout::VariableCount;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Up, down, left, right
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A connected group of 1-cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    index: usize,
    /// Size of the map the group was found on
    variable_count: VariableCount,
    /// Cells in visit order; the first one is the scan-order seed
    cells: Vec<(usize, usize)>,
}

impl Group {
    /// Position of this group in discovery order
    pub fn index(&self) -> usize {
        self.index
    }

    /// Variable count of the map the group was found on
    pub fn variable_count(&self) -> VariableCount {
        self.variable_count
    }

    /// Number of cells in the group
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Cell coordinates `(row, col)` in the order the search visited them
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Whether the group contains `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Distinct row indices spanned by the group
    pub fn rows_spanned(&self) -> BTreeSet<usize> {
        self.cells.iter().map(|&(row, _)| row).collect()
    }

    /// Distinct column indices spanned by the group
    pub fn cols_spanned(&self) -> BTreeSet<usize> {
        self.cells.iter().map(|&(_, col)| col).collect()
    }

    /// The smallest cube containing every cell of the group
    ///
    /// One entry per variable, most significant first:
    /// - `Some(false)` - the variable is 0 across the group
    /// - `Some(true)` - the variable is 1 across the group
    /// - `None` - the variable takes both values (eliminated)
    pub fn cube(&self) -> Vec<Option<bool>> {
        let layout = self.variable_count.layout();
        let mut cube: Vec<Option<bool>> = Vec::new();
        for (i, &(row, col)) in self.cells.iter().enumerate() {
            let bits = layout.input_bits(row, col);
            if i == 0 {
                cube = bits.into_iter().map(Some).collect();
                continue;
            }
            for (slot, bit) in cube.iter_mut().zip(bits) {
                if *slot != Some(bit) {
                    *slot = None;
                }
            }
        }
        cube
    }

    /// Whether the group is exactly the cube of its literals
    ///
    /// True for the rectangles of 1, 2, 4, 8 or 16 cells (wrapping allowed)
    /// that textbook minimisation uses. Irregular components return false, and
    /// so do components whose bounding cube also covers cells outside the group.
    pub fn is_implicant(&self) -> bool {
        let eliminated = self
            .cube()
            .iter()
            .filter(|slot| slot.is_none())
            .count();
        !self.cells.is_empty() && self.cells.len() == 1 << eliminated
    }
}

/// Partition the map's 1-cells into connected groups
///
/// Cells are scanned in row-major order; each unvisited 1-cell seeds a
/// depth-first search with an explicit stack. Groups come back in discovery
/// order, so the same map always yields the same groups in the same order. A map
/// without 1-cells yields no groups.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::{find_groups, Grid};
///
/// // Corners of the top row touch through the wraparound
/// let grid = Grid::from_minterms(4, &[0, 3]).unwrap();
/// let groups = find_groups(&grid);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].size(), 2);
/// ```
pub fn find_groups(grid: &Grid) -> Vec<Group> {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut visited = vec![false; rows * cols];
    let mut groups = Vec::new();

    for seed in grid.cells().filter(|cell| cell.value()) {
        let start = (seed.row_index(), seed.col_index());
        if visited[start.0 * cols + start.1] {
            continue;
        }

        let mut cells = Vec::new();
        let mut stack = vec![start];
        visited[start.0 * cols + start.1] = true;

        while let Some((row, col)) = stack.pop() {
            trace!(row, col, group = groups.len(), "visiting cell");
            cells.push((row, col));

            for (dr, dc) in DIRECTIONS {
                let r = wrap(row, dr, rows);
                let c = wrap(col, dc, cols);
                if !visited[r * cols + c] && grid.value_at(r, c) == Some(true) {
                    visited[r * cols + c] = true;
                    stack.push((r, c));
                }
            }
        }

        debug!(
            index = groups.len(),
            size = cells.len(),
            seed = ?start,
            "discovered group"
        );
        groups.push(Group {
            index: groups.len(),
            variable_count: grid.variable_count(),
            cells,
        });
    }

    groups
}

/// `(pos + delta + len) % len` for a step of at most one cell
fn wrap(pos: usize, delta: isize, len: usize) -> usize {
    (pos as isize + delta + len as isize) as usize % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::VariableCount;

    fn sorted(group: &Group) -> Vec<(usize, usize)> {
        let mut cells = group.cells().to_vec();
        cells.sort_unstable();
        cells
    }

    #[test]
    fn test_empty_grid_has_no_groups() {
        let grid = Grid::from_minterms(4, &[]).unwrap();
        assert!(find_groups(&grid).is_empty());
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 4), 3);
        assert_eq!(wrap(3, 1, 4), 0);
        assert_eq!(wrap(1, 1, 2), 0);
        assert_eq!(wrap(2, 0, 4), 2);
    }

    #[test]
    fn test_single_cell_groups() {
        // Diagonal cells are not adjacent
        let grid = Grid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].cells(), &[(0, 0)]);
        assert_eq!(groups[1].cells(), &[(1, 1)]);
        assert_eq!(groups[0].index(), 0);
        assert_eq!(groups[1].index(), 1);
    }

    #[test]
    fn test_vertical_wraparound() {
        let grid = Grid::from_rows(&[
            [1, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [1, 0, 0, 0],
        ])
        .unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 1);
        assert_eq!(sorted(&groups[0]), vec![(0, 0), (3, 0)]);
    }

    #[test]
    fn test_three_variable_map_wraps_rows() {
        let grid = Grid::from_rows(&[[0, 1], [0, 0], [0, 0], [0, 1]]).unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].size(), 2);
    }

    #[test]
    fn test_discovery_order_follows_scan_order() {
        // The small group's seed comes first in row-major order
        let grid = Grid::from_rows(&[
            [0, 0, 1, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 1, 0, 0],
        ])
        .unwrap();
        let grid = crate::toggle_cell(&grid, 2, 1).unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].cells()[0], (0, 2));
        assert_eq!(groups[1].cells()[0], (2, 1));
        assert_eq!(groups[1].size(), 2);
    }

    #[test]
    fn test_irregular_component_is_one_group() {
        // L-shape of three cells
        let grid = Grid::from_rows(&[
            [1, 1, 0, 0],
            [1, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].size(), 3);
        assert!(!groups[0].is_implicant());
    }

    #[test]
    fn test_full_map_is_single_group() {
        let grid = Grid::from_minterms(3, &[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].size(), 8);
        assert_eq!(groups[0].cube(), vec![None, None, None]);
        assert!(groups[0].is_implicant());
    }

    #[test]
    fn test_cube_of_wrapped_pair() {
        // (0,0) = 0000 and (0,3) = 0010: C varies
        let grid = Grid::from_minterms(4, &[0, 3]).unwrap();
        let groups = find_groups(&grid);
        assert_eq!(
            groups[0].cube(),
            vec![Some(false), Some(false), None, Some(false)]
        );
        assert!(groups[0].is_implicant());
    }

    #[test]
    fn test_row_of_four_is_implicant() {
        let grid = Grid::from_rows(&[
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].cube(),
            vec![Some(false), Some(true), None, None]
        );
        assert!(groups[0].is_implicant());
    }

    #[test]
    fn test_spans() {
        let grid = Grid::from_rows(&[[1, 1], [0, 0]]).unwrap();
        let groups = find_groups(&grid);
        assert_eq!(groups[0].rows_spanned().into_iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(groups[0].cols_spanned().into_iter().collect::<Vec<_>>(), vec![0, 1]);
        assert!(groups[0].contains(0, 1));
        assert!(!groups[0].contains(1, 1));
    }

    #[test]
    fn test_groups_remember_their_map_size() {
        for (vc, minterms) in [
            (VariableCount::Two, vec![3]),
            (VariableCount::Three, vec![7]),
            (VariableCount::Four, vec![15]),
        ] {
            let grid = Grid::from_minterms(vc.get(), &minterms).unwrap();
            let groups = find_groups(&grid);
            assert_eq!(groups[0].variable_count(), vc);
            assert_eq!(groups[0].cube().len(), vc.get());
        }
    }
}
