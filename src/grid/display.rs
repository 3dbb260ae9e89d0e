//! Text rendering of Karnaugh maps

use super::Grid;
use std::fmt;

/// Renders the map with Gray-code axis labels
///
/// The corner names the row and column variables, e.g. `AB\CD`.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::Grid;
///
/// let grid = Grid::from_rows(&[[1, 1], [0, 0]]).unwrap();
/// assert_eq!(grid.to_string(), "A\\B 0 1\n  0 1 1\n  1 0 0");
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout;
        let corner: String = layout
            .row_variables()
            .iter()
            .chain(['\\'].iter())
            .chain(layout.col_variables())
            .collect();
        let corner_width = corner.len();
        let cell_width = layout.col_gray()[0].len();

        write!(f, "{}", corner)?;
        for label in layout.col_gray() {
            write!(f, " {}", label)?;
        }

        for (row, cells) in self.row_slices().enumerate() {
            write!(f, "\n{:>width$}", layout.row_gray()[row], width = corner_width)?;
            for cell in cells {
                write!(f, " {:>width$}", cell.bit(), width = cell_width)?;
            }
        }
        Ok(())
    }
}
