//! Map layouts keyed by variable count
//!
//! Every per-size parameter of a Karnaugh map (dimensions, Gray-code axis labels,
//! variable assignment to axes, positional minterm stride) lives in one static
//! table so the rest of the crate never branches on the variable count.

use crate::error::KarnaughError;

/// Variable names in significance order (A is the most significant input)
const VARIABLES: [char; 4] = ['A', 'B', 'C', 'D'];

const GRAY_1: [&str; 2] = ["0", "1"];
const GRAY_2: [&str; 4] = ["00", "01", "11", "10"];

static LAYOUTS: [MapLayout; 3] = [
    MapLayout {
        variable_count: VariableCount::Two,
        rows: 2,
        cols: 2,
        row_gray: &GRAY_1,
        col_gray: &GRAY_1,
        positional_stride: 2,
    },
    MapLayout {
        variable_count: VariableCount::Three,
        rows: 4,
        cols: 2,
        row_gray: &GRAY_2,
        col_gray: &GRAY_1,
        positional_stride: 2,
    },
    MapLayout {
        variable_count: VariableCount::Four,
        rows: 4,
        cols: 4,
        row_gray: &GRAY_2,
        col_gray: &GRAY_2,
        positional_stride: 4,
    },
];

/// Number of input variables of a Karnaugh map
///
/// Only 2, 3 and 4 variable maps exist. Construct one with [`VariableCount::new`]
/// or `TryFrom<usize>`, which reject every other count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableCount {
    /// 2×2 map over A, B
    Two = 2,
    /// 4×2 map, rows AB, columns C
    Three = 3,
    /// 4×4 map, rows AB, columns CD
    Four = 4,
}

impl VariableCount {
    /// Validate a raw variable count
    ///
    /// # Examples
    ///
    /// ```
    /// use karnaugh_logic::VariableCount;
    ///
    /// assert_eq!(VariableCount::new(3).unwrap(), VariableCount::Three);
    /// assert!(VariableCount::new(5).is_err());
    /// ```
    pub fn new(variable_count: usize) -> Result<Self, KarnaughError> {
        match variable_count {
            2 => Ok(VariableCount::Two),
            3 => Ok(VariableCount::Three),
            4 => Ok(VariableCount::Four),
            _ => Err(KarnaughError::InvalidArgument { variable_count }),
        }
    }

    /// The number of variables as an integer
    pub fn get(self) -> usize {
        self as usize
    }

    /// Number of cells in a map of this size (`2^n`)
    pub fn num_cells(self) -> usize {
        1 << self.get()
    }

    /// Variable names used by this map, most significant first
    pub fn variables(self) -> &'static [char] {
        &VARIABLES[..self.get()]
    }

    /// The static layout for this variable count
    pub fn layout(self) -> &'static MapLayout {
        match self {
            VariableCount::Two => &LAYOUTS[0],
            VariableCount::Three => &LAYOUTS[1],
            VariableCount::Four => &LAYOUTS[2],
        }
    }
}

impl TryFrom<usize> for VariableCount {
    type Error = KarnaughError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        VariableCount::new(value)
    }
}

impl std::fmt::Display for VariableCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// How cells are numbered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MintermOrder {
    /// `row * stride + col` with a stride of 2 for 2 and 3 variable maps and 4
    /// for 4 variable maps. The number follows the cell's grid position and not
    /// its Gray-code labels.
    #[default]
    Positional,
    /// Textbook numbering: the concatenated row and column Gray labels read as
    /// a binary number, so the minterm matches the cell's input combination.
    GrayCode,
}

/// Geometry and labelling of one map size
#[derive(Debug, PartialEq, Eq)]
pub struct MapLayout {
    variable_count: VariableCount,
    rows: usize,
    cols: usize,
    row_gray: &'static [&'static str],
    col_gray: &'static [&'static str],
    positional_stride: usize,
}

impl MapLayout {
    /// Find the layout whose dimensions are `rows × cols`
    pub fn for_shape(rows: usize, cols: usize) -> Option<&'static MapLayout> {
        LAYOUTS
            .iter()
            .find(|layout| layout.rows == rows && layout.cols == cols)
    }

    /// Variable count of this layout
    pub fn variable_count(&self) -> VariableCount {
        self.variable_count
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gray-code labels of the rows, top to bottom
    pub fn row_gray(&self) -> &'static [&'static str] {
        self.row_gray
    }

    /// Gray-code labels of the columns, left to right
    pub fn col_gray(&self) -> &'static [&'static str] {
        self.col_gray
    }

    /// Variables encoded along the row axis (e.g. `AB`)
    pub fn row_variables(&self) -> &'static [char] {
        &VARIABLES[..self.row_bits()]
    }

    /// Variables encoded along the column axis (e.g. `CD`)
    pub fn col_variables(&self) -> &'static [char] {
        &VARIABLES[self.row_bits()..self.variable_count.get()]
    }

    fn row_bits(&self) -> usize {
        self.row_gray[0].len()
    }

    /// Minterm number of the cell at `(row, col)`
    ///
    /// Callers must pass in-range coordinates.
    pub fn minterm(&self, row: usize, col: usize, order: MintermOrder) -> u32 {
        match order {
            MintermOrder::Positional => (row * self.positional_stride + col) as u32,
            MintermOrder::GrayCode => self
                .input_bits(row, col)
                .into_iter()
                .fold(0, |acc, bit| (acc << 1) | u32::from(bit)),
        }
    }

    /// Values of every variable at `(row, col)`, most significant first
    ///
    /// These are the bits of the row label followed by the bits of the column label.
    pub fn input_bits(&self, row: usize, col: usize) -> Vec<bool> {
        self.row_gray[row]
            .chars()
            .chain(self.col_gray[col].chars())
            .map(|ch| ch == '1')
            .collect()
    }

    /// Grid position of the cell for an input combination
    pub fn locate(&self, inputs: &[bool]) -> Option<(usize, usize)> {
        if inputs.len() != self.variable_count.get() {
            return None;
        }
        let (row_bits, col_bits) = inputs.split_at(self.row_bits());
        let row = position_of(self.row_gray, row_bits)?;
        let col = position_of(self.col_gray, col_bits)?;
        Some((row, col))
    }
}

fn position_of(labels: &[&str], bits: &[bool]) -> Option<usize> {
    labels.iter().position(|label| {
        label
            .chars()
            .zip(bits)
            .all(|(ch, &bit)| (ch == '1') == bit)
    })
}

/// Reflected binary Gray code sequence over `bits` bits
///
/// Consecutive entries, including the last and the first, differ in exactly one
/// bit.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::gray_code;
///
/// assert_eq!(gray_code(2), vec!["00", "01", "11", "10"]);
/// ```
pub fn gray_code(bits: usize) -> Vec<String> {
    if bits == 0 {
        return vec![String::new()];
    }
    let previous = gray_code(bits - 1);
    let zeros = previous.iter().map(|code| format!("0{}", code));
    let ones = previous.iter().rev().map(|code| format!("1{}", code));
    zeros.chain(ones).collect()
}
