//! # Karnaugh Logic
//!
//! Karnaugh map generation, adjacency grouping and sum-of-products derivation
//! for 2, 3 and 4 variable Boolean functions.
//!
//! ## Overview
//!
//! A Karnaugh map lays a truth table out on a grid whose rows and columns are
//! labelled in Gray code, so that neighbouring cells differ in exactly one input
//! variable. The crate runs one pipeline over such a map:
//!
//! ```text
//! grid(variables) -> adjacency discovery -> groups -> term derivation -> expression
//! ```
//!
//! - [`generate_grid`] builds a map (random or all zero) with Gray labels and
//!   minterm numbers
//! - [`find_groups`] flood-fills the 1-cells into connected groups; maps are
//!   toroidal, so opposite edges touch
//! - [`derive_term`] and [`build_expression`] turn the groups into product terms
//!   and a sum-of-products expression
//! - [`toggle_cell`] edits a single cell, returning a new snapshot
//!
//! ## Quick start
//!
//! ```
//! use karnaugh_logic::{build_expression, find_groups, toggle_cell, Grid};
//!
//! # fn main() -> Result<(), karnaugh_logic::KarnaughError> {
//! let grid = Grid::from_rows(&[[1, 1], [0, 0]])?;
//! let groups = find_groups(&grid);
//! assert_eq!(build_expression(&groups, grid.variable_count()), "A'");
//!
//! // Edits never patch derived state: recompute from the new grid
//! let grid = toggle_cell(&grid, 1, 1)?;
//! let groups = find_groups(&grid);
//! assert_eq!(build_expression(&groups, grid.variable_count()), "Group 1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Sessions
//!
//! [`Session`] owns a map plus its groups and expression and keeps them in step
//! across edits, variable count changes and regeneration:
//!
//! ```
//! use karnaugh_logic::Session;
//!
//! # fn main() -> Result<(), karnaugh_logic::KarnaughError> {
//! let mut session = Session::with_seed(4, 2024)?;
//! session.toggle(0, 0)?;
//! println!("{}\n= {}", session.grid(), session.expression());
//! # Ok(())
//! # }
//! ```
//!
//! ## Grouping semantics
//!
//! Groups are connected components, not the power-of-two rectangles of textbook
//! minimisation. An irregular component is still reported as one group, and
//! [`Group::is_implicant`] tells whether a group is a valid product term. For 3
//! and 4 variable maps the default configuration labels terms `Term N`; set
//! [`TermStyle::Literals`] to derive literals per variable instead.
//!
//! ## Minterm numbering
//!
//! Cells are numbered positionally by default (`row * 2 + col` for 2 and 3
//! variables, `row * 4 + col` for 4). [`MintermOrder::GrayCode`] switches to the
//! textbook numbering derived from the Gray labels.
//!
//! ## Compile-time maps
//!
//! The [`kmap!`] macro checks the map shape at compile time:
//!
//! ```
//! use karnaugh_logic::kmap;
//!
//! let grid = kmap![[1, 0], [0, 1]];
//! assert_eq!(grid.ones(), 2);
//! ```

// Public modules
pub mod error;
pub mod grid;
pub mod group;
pub mod layout;
pub mod pla;
pub mod session;
pub mod term;

// Re-export high-level public API
pub use error::{KarnaughError, PlaError};
pub use grid::{
    generate_grid, generate_grid_with, generate_grid_with_rng, toggle_cell, Cell, Grid,
    TruthTableRow,
};
pub use group::{find_groups, Group};
pub use layout::{gray_code, MapLayout, MintermOrder, VariableCount};
pub use pla::{PlaReader, PlaWriter};
pub use session::Session;
pub use term::{
    build_expression, build_expression_with, derive_term, derive_term_with, Literal, Notation,
    TermStyle,
};

pub use karnaugh_logic_macros::kmap;

/// Configuration for map numbering and term derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KarnaughConfig {
    /// How cells are numbered
    pub minterm_order: MintermOrder,
    /// How terms are derived for 3 and 4 variable maps
    pub term_style: TermStyle,
    /// Literal and product notation
    pub notation: Notation,
}

impl KarnaughConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
