//! Error types for Karnaugh map construction, editing and PLA I/O
//!
//! Every fallible operation in the crate returns [`KarnaughError`]. The grouping
//! and term derivation steps are total over well-formed grids and never fail.

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// The main error type for Karnaugh map operations
///
/// All variants describe contract violations by the caller. Nothing in the crate
/// retries or recovers; errors surface immediately and no partial grid is produced.
#[derive(Debug, Error)]
pub enum KarnaughError {
    /// A variable count outside `{2, 3, 4}` was requested
    #[error("Unsupported variable count {variable_count}. Karnaugh maps support 2, 3 or 4 variables.")]
    InvalidArgument {
        /// The rejected variable count
        variable_count: usize,
    },

    /// A cell coordinate lies outside the grid
    #[error("Cell ({row}, {col}) is out of bounds for a {rows}x{cols} map")]
    OutOfBounds {
        /// Requested row
        row: isize,
        /// Requested column
        col: isize,
        /// Number of rows in the grid
        rows: usize,
        /// Number of columns in the grid
        cols: usize,
    },

    /// An explicit bit matrix has a shape that matches no map layout, or holds
    /// values other than 0 and 1
    #[error("Invalid map rows: {message}")]
    InvalidRows {
        /// Description of what was wrong
        message: Arc<str>,
    },

    /// A minterm index does not exist in a map of the given size
    #[error("Minterm {minterm} does not exist in a {variable_count}-variable map")]
    InvalidMinterm {
        /// The rejected minterm
        minterm: u32,
        /// Number of variables of the target map
        variable_count: u8,
    },

    /// PLA text could not be interpreted as a Karnaugh map
    #[error(transparent)]
    Pla(#[from] PlaError),

    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors related to PLA format parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaError {
    /// The `.i` directive is absent and cannot be inferred
    #[error("PLA input missing .i directive and no cubes to infer from")]
    MissingInputDirective,
    /// Invalid value in the `.i` directive
    #[error("Invalid .i directive value: '{value}'")]
    InvalidInputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in the `.o` directive, or more than one output
    #[error("Unsupported .o directive value: '{value}'. Karnaugh maps have exactly one output.")]
    UnsupportedOutputs {
        /// The offending value string
        value: Arc<str>,
    },
    /// Invalid character in the input part of a cube
    #[error("Invalid input character '{character}' at position {position} on line {line}")]
    InvalidInputCharacter {
        /// The invalid character
        character: char,
        /// Position in the input string
        position: usize,
        /// One-based line number
        line: usize,
    },
    /// Invalid character in the output part of a cube
    #[error("Invalid output character '{character}' on line {line}")]
    InvalidOutputCharacter {
        /// The invalid character
        character: char,
        /// One-based line number
        line: usize,
    },
    /// A cube line does not match the declared dimensions
    #[error("Cube on line {line} has {actual_inputs} inputs, expected {expected_inputs}")]
    CubeDimensionMismatch {
        /// Declared number of inputs
        expected_inputs: usize,
        /// Inputs found on the line
        actual_inputs: usize,
        /// One-based line number
        line: usize,
    },
}

// Conversion to io::Error so map operations compose with io::Result code
impl From<KarnaughError> for io::Error {
    fn from(err: KarnaughError) -> Self {
        match err {
            KarnaughError::Io(io_err) => io_err,
            KarnaughError::Pla(pla) => io::Error::new(io::ErrorKind::InvalidData, pla),
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
