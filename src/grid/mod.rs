//! Karnaugh map grids
//!
//! This module provides [`Grid`], a rectangular map of binary cells addressed by
//! Gray-code labelled rows and columns, together with the generator and edit
//! operations that produce new grids. Grids are immutable snapshots: every
//! operation that changes a value returns a fresh grid and leaves its input alone.

mod display;

use crate::error::KarnaughError;
use crate::layout::{MapLayout, MintermOrder, VariableCount};
use crate::KarnaughConfig;
use rand::Rng;

/// A single cell of a Karnaugh map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) value: bool,
    pub(crate) row_index: usize,
    pub(crate) col_index: usize,
    pub(crate) gray_row: &'static str,
    pub(crate) gray_col: &'static str,
    pub(crate) minterm: u32,
}

impl Cell {
    /// Whether the function is 1 at this cell
    pub fn value(&self) -> bool {
        self.value
    }

    /// The cell value as a bit (0 or 1)
    pub fn bit(&self) -> u8 {
        u8::from(self.value)
    }

    /// Zero-based row coordinate
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    /// Zero-based column coordinate
    pub fn col_index(&self) -> usize {
        self.col_index
    }

    /// Gray-code label of the cell's row
    pub fn gray_row(&self) -> &'static str {
        self.gray_row
    }

    /// Gray-code label of the cell's column
    pub fn gray_col(&self) -> &'static str {
        self.gray_col
    }

    /// Minterm number of the cell
    pub fn minterm(&self) -> u32 {
        self.minterm
    }
}

/// A Karnaugh map
///
/// # Examples
///
/// ```
/// use karnaugh_logic::Grid;
///
/// let grid = Grid::from_rows(&[[1, 1], [0, 0]]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.ones(), 2);
/// assert_eq!(grid.cell(0, 1).unwrap().gray_col(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    layout: &'static MapLayout,
    minterm_order: MintermOrder,
    /// Row-major cells
    cells: Vec<Cell>,
}

/// Generate a map with `variable_count` variables
///
/// With `randomize` every cell is independently 0 or 1 with equal probability,
/// otherwise every cell is 0. Variable counts other than 2, 3 and 4 are rejected
/// before anything is built.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::generate_grid;
///
/// let grid = generate_grid(3, false).unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (4, 2));
/// assert_eq!(grid.ones(), 0);
///
/// assert!(generate_grid(5, true).is_err());
/// ```
pub fn generate_grid(variable_count: usize, randomize: bool) -> Result<Grid, KarnaughError> {
    generate_grid_with(variable_count, randomize, &KarnaughConfig::default())
}

/// [`generate_grid`] with an explicit configuration
pub fn generate_grid_with(
    variable_count: usize,
    randomize: bool,
    config: &KarnaughConfig,
) -> Result<Grid, KarnaughError> {
    let variable_count = VariableCount::new(variable_count)?;
    if randomize {
        Ok(Grid::random(variable_count, config, &mut rand::thread_rng()))
    } else {
        Ok(Grid::build(variable_count, config.minterm_order, |_, _| false))
    }
}

/// Generate a random map drawing cell values from `rng`
///
/// The same seeded generator always yields the same map.
pub fn generate_grid_with_rng<R: Rng + ?Sized>(
    variable_count: usize,
    config: &KarnaughConfig,
    rng: &mut R,
) -> Result<Grid, KarnaughError> {
    let variable_count = VariableCount::new(variable_count)?;
    Ok(Grid::random(variable_count, config, rng))
}

/// Flip the cell at `(row, col)`, returning the edited copy
///
/// Coordinates are signed so that negative input from a caller is reported as
/// [`KarnaughError::OutOfBounds`] rather than wrapping. The input grid is never
/// modified.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::{generate_grid, toggle_cell};
///
/// let grid = generate_grid(2, false).unwrap();
/// let edited = toggle_cell(&grid, 1, 0).unwrap();
/// assert!(edited.value_at(1, 0).unwrap());
/// assert!(!grid.value_at(1, 0).unwrap());
///
/// assert!(toggle_cell(&grid, -1, 0).is_err());
/// ```
pub fn toggle_cell(grid: &Grid, row: isize, col: isize) -> Result<Grid, KarnaughError> {
    let index = grid.checked_index(row, col)?;
    let mut toggled = grid.clone();
    let cell = &mut toggled.cells[index];
    cell.value = !cell.value;
    Ok(toggled)
}

impl Grid {
    fn build(
        variable_count: VariableCount,
        minterm_order: MintermOrder,
        mut value: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        let layout = variable_count.layout();
        let mut cells = Vec::with_capacity(layout.rows() * layout.cols());
        for row in 0..layout.rows() {
            for col in 0..layout.cols() {
                cells.push(Cell {
                    value: value(row, col),
                    row_index: row,
                    col_index: col,
                    gray_row: layout.row_gray()[row],
                    gray_col: layout.col_gray()[col],
                    minterm: layout.minterm(row, col, minterm_order),
                });
            }
        }
        Grid {
            layout,
            minterm_order,
            cells,
        }
    }

    pub(crate) fn random<R: Rng + ?Sized>(
        variable_count: VariableCount,
        config: &KarnaughConfig,
        rng: &mut R,
    ) -> Self {
        Grid::build(variable_count, config.minterm_order, |_, _| rng.gen_bool(0.5))
    }

    /// Build a map from an explicit bit matrix
    ///
    /// The shape selects the variable count: 2×2, 4×2 or 4×4. Every entry must
    /// be 0 or 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, KarnaughError> {
        Self::from_rows_with(rows, &KarnaughConfig::default())
    }

    /// [`Grid::from_rows`] with an explicit configuration
    pub fn from_rows_with<R: AsRef<[u8]>>(
        rows: &[R],
        config: &KarnaughConfig,
    ) -> Result<Self, KarnaughError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some(ragged) = rows.iter().position(|row| row.as_ref().len() != num_cols) {
            return Err(KarnaughError::InvalidRows {
                message: format!(
                    "row {} has {} entries, expected {}",
                    ragged,
                    rows[ragged].as_ref().len(),
                    num_cols
                )
                .into(),
            });
        }
        let layout =
            MapLayout::for_shape(num_rows, num_cols).ok_or_else(|| KarnaughError::InvalidRows {
                message: format!(
                    "a {}x{} map matches no layout (expected 2x2, 4x2 or 4x4)",
                    num_rows, num_cols
                )
                .into(),
            })?;
        for (r, row) in rows.iter().enumerate() {
            if let Some(c) = row.as_ref().iter().position(|&bit| bit > 1) {
                return Err(KarnaughError::InvalidRows {
                    message: format!(
                        "value {} at ({}, {}) is not a bit",
                        row.as_ref()[c],
                        r,
                        c
                    )
                    .into(),
                });
            }
        }
        Ok(Grid::build(
            layout.variable_count(),
            config.minterm_order,
            |row, col| rows[row].as_ref()[col] == 1,
        ))
    }

    /// Build a map from row-major bits
    ///
    /// Missing trailing entries read as 0, entries beyond the map are ignored and
    /// any non-zero entry reads as 1. This is the constructor behind `kmap!`,
    /// which checks the shape at compile time.
    pub fn from_bits(variable_count: VariableCount, bits: &[u8]) -> Self {
        let cols = variable_count.layout().cols();
        Grid::build(variable_count, MintermOrder::default(), |row, col| {
            bits.get(row * cols + col).is_some_and(|&bit| bit != 0)
        })
    }

    /// Build a map whose 1-cells are exactly the listed minterms
    ///
    /// Minterms are interpreted with the default (positional) numbering.
    ///
    /// # Examples
    ///
    /// ```
    /// use karnaugh_logic::Grid;
    ///
    /// let grid = Grid::from_minterms(4, &[0, 5, 15]).unwrap();
    /// assert_eq!(grid.ones(), 3);
    /// assert!(Grid::from_minterms(4, &[16]).is_err());
    /// ```
    pub fn from_minterms(variable_count: usize, minterms: &[u32]) -> Result<Self, KarnaughError> {
        Self::from_minterms_with(variable_count, minterms, &KarnaughConfig::default())
    }

    /// [`Grid::from_minterms`] with an explicit configuration
    pub fn from_minterms_with(
        variable_count: usize,
        minterms: &[u32],
        config: &KarnaughConfig,
    ) -> Result<Self, KarnaughError> {
        let variable_count = VariableCount::new(variable_count)?;
        if let Some(&minterm) = minterms
            .iter()
            .find(|&&m| m as usize >= variable_count.num_cells())
        {
            return Err(KarnaughError::InvalidMinterm {
                minterm,
                variable_count: variable_count.get() as u8,
            });
        }
        let layout = variable_count.layout();
        Ok(Grid::build(variable_count, config.minterm_order, |row, col| {
            minterms.contains(&layout.minterm(row, col, config.minterm_order))
        }))
    }

    /// Copy of this map with `(row, col)` set to `value`
    pub fn with_value(&self, row: isize, col: isize, value: bool) -> Result<Self, KarnaughError> {
        let index = self.checked_index(row, col)?;
        let mut edited = self.clone();
        edited.cells[index].value = value;
        Ok(edited)
    }

    fn checked_index(&self, row: isize, col: isize) -> Result<usize, KarnaughError> {
        let rows = self.rows();
        let cols = self.cols();
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < rows && c < cols => Ok(r * cols + c),
            _ => Err(KarnaughError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            }),
        }
    }

    /// Number of variables
    pub fn variable_count(&self) -> VariableCount {
        self.layout.variable_count()
    }

    /// Layout (dimensions and labels) of this map
    pub fn layout(&self) -> &'static MapLayout {
        self.layout
    }

    /// Minterm numbering used by this map's cells
    pub fn minterm_order(&self) -> MintermOrder {
        self.minterm_order
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// The cell at `(row, col)`, if it exists
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.cells.get(row * self.cols() + col)
    }

    /// The value at `(row, col)`, if the cell exists
    pub fn value_at(&self, row: usize, col: usize) -> Option<bool> {
        self.cell(row, col).map(Cell::value)
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Iterate over the rows of the map
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols())
    }

    /// Number of 1-cells
    pub fn ones(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value).count()
    }

    /// Minterms of all 1-cells, in ascending order
    pub fn minterms(&self) -> Vec<u32> {
        let mut minterms: Vec<u32> = self
            .cells
            .iter()
            .filter(|cell| cell.value)
            .map(|cell| cell.minterm)
            .collect();
        minterms.sort_unstable();
        minterms
    }

    /// The map as a truth table
    ///
    /// Rows are ordered by input combination (A most significant), each carrying
    /// the variable values, the function value and the cell's minterm label. With
    /// the default positional numbering the label does not always equal the row
    /// number for 3 and 4 variable maps.
    pub fn truth_table(&self) -> Vec<TruthTableRow> {
        let n = self.variable_count().get();
        (0..self.variable_count().num_cells())
            .filter_map(|combination| {
                let inputs: Vec<bool> = (0..n)
                    .map(|bit| combination & (1 << (n - 1 - bit)) != 0)
                    .collect();
                let (row, col) = self.layout.locate(&inputs)?;
                let cell = self.cell(row, col)?;
                Some(TruthTableRow {
                    inputs,
                    value: cell.value,
                    minterm: cell.minterm,
                })
            })
            .collect()
    }
}

/// One row of [`Grid::truth_table`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    /// Variable values, most significant first
    pub inputs: Vec<bool>,
    /// Function value
    pub value: bool,
    /// Minterm label of the corresponding cell
    pub minterm: u32,
}

#[cfg(test)]
mod tests;
