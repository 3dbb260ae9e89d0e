//! PLA (Programmable Logic Array) format support
//!
//! Karnaugh maps exchange data with logic tools through Berkeley PLA text. A map
//! is written as a single-output F-type cover with inputs labelled `A`..`D`;
//! reading accepts any single-output PLA over 2 to 4 inputs and sets every cell
//! covered by an ON-set cube.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::error::{KarnaughError, PlaError};
use crate::grid::Grid;
use crate::group::Group;
use crate::layout::VariableCount;
use crate::session::Session;
use crate::KarnaughConfig;

/// Name of the single output written to `.ob`
const OUTPUT_LABEL: &str = "f";

/// Types that can be written as a PLA cover
pub trait PlaWriter {
    /// Write this cover in PLA format
    ///
    /// This is the core serialization method; `to_pla_string` and
    /// `to_pla_file` delegate to it.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), KarnaughError>;

    /// Convert this cover to a PLA format string
    fn to_pla_string(&self) -> Result<String, KarnaughError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        // PLA output is ASCII
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write this cover to a PLA file
    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> Result<(), KarnaughError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Types that can be read from PLA text
pub trait PlaReader: Sized {
    /// Parse from any buffered reader
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, KarnaughError>;

    /// Parse from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use karnaugh_logic::{Grid, PlaReader};
    ///
    /// let grid = Grid::from_pla_string(".i 2\n.o 1\n.p 1\n0- 1\n.e\n").unwrap();
    /// assert_eq!(grid.ones(), 2);
    /// ```
    fn from_pla_string(s: &str) -> Result<Self, KarnaughError> {
        Self::from_pla_reader(s.as_bytes())
    }

    /// Load from a file
    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, KarnaughError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

/// One cube per 1-cell
impl PlaWriter for Grid {
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), KarnaughError> {
        let layout = self.layout();
        let cubes: Vec<Vec<Option<bool>>> = self
            .cells()
            .filter(|cell| cell.value())
            .map(|cell| {
                layout
                    .input_bits(cell.row_index(), cell.col_index())
                    .into_iter()
                    .map(Some)
                    .collect()
            })
            .collect();
        write_cover(writer, self.variable_count(), &cubes)
    }
}

/// One cube per group
///
/// Groups that are exact implicants are written as their cube. Irregular groups
/// are written cell by cell so the cover never includes a 0-cell.
impl PlaWriter for Session {
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), KarnaughError> {
        let variable_count = self.grid().variable_count();
        let cubes: Vec<Vec<Option<bool>>> = self
            .groups()
            .iter()
            .flat_map(group_cubes)
            .collect();
        write_cover(writer, variable_count, &cubes)
    }
}

fn group_cubes(group: &Group) -> Vec<Vec<Option<bool>>> {
    if group.is_implicant() {
        return vec![group.cube()];
    }
    let layout = group.variable_count().layout();
    group
        .cells()
        .iter()
        .map(|&(row, col)| layout.input_bits(row, col).into_iter().map(Some).collect())
        .collect()
}

fn write_cover<W: Write>(
    writer: &mut W,
    variable_count: VariableCount,
    cubes: &[Vec<Option<bool>>],
) -> Result<(), KarnaughError> {
    writeln!(writer, ".i {}", variable_count)?;
    write!(writer, ".ilb")?;
    for variable in variable_count.variables() {
        write!(writer, " {}", variable)?;
    }
    writeln!(writer)?;
    writeln!(writer, ".o 1")?;
    writeln!(writer, ".ob {}", OUTPUT_LABEL)?;
    writeln!(writer, ".p {}", cubes.len())?;

    for cube in cubes {
        for input in cube {
            write!(
                writer,
                "{}",
                match input {
                    Some(false) => '0',
                    Some(true) => '1',
                    None => '-',
                }
            )?;
        }
        writeln!(writer, " 1")?;
    }

    writeln!(writer, ".e")?;
    Ok(())
}

impl PlaReader for Grid {
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, KarnaughError> {
        read_grid(reader, &KarnaughConfig::default())
    }
}

/// Parse a PLA into a map using `config` for minterm numbering
pub fn read_grid<R: BufRead>(reader: R, config: &KarnaughConfig) -> Result<Grid, KarnaughError> {
    let mut num_inputs: Option<usize> = None;
    // (line number, input part, output character)
    let mut cubes: Vec<(usize, String, char)> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_no + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('.') {
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.first().copied() {
                Some(".i") => {
                    let value = parts.get(1).copied().unwrap_or("");
                    let n = value
                        .parse()
                        .map_err(|_| PlaError::InvalidInputDirective {
                            value: Arc::from(value),
                        })?;
                    num_inputs = Some(n);
                }
                Some(".o") => {
                    let value = parts.get(1).copied().unwrap_or("");
                    if value != "1" {
                        return Err(PlaError::UnsupportedOutputs {
                            value: Arc::from(value),
                        }
                        .into());
                    }
                }
                Some(".e") | Some(".end") => break,
                // .ilb, .ob, .p, .type and the rest carry nothing a map needs
                _ => {}
            }
            continue;
        }

        let (inputs, outputs) = split_cube(line);
        let mut output_chars = outputs.chars();
        let output = match (output_chars.next(), output_chars.next()) {
            (Some(ch), None) => ch,
            (Some(_), Some(_)) => {
                return Err(PlaError::UnsupportedOutputs {
                    value: Arc::from(outputs.as_str()),
                }
                .into())
            }
            (None, _) => {
                return Err(PlaError::InvalidOutputCharacter {
                    character: ' ',
                    line: line_no,
                }
                .into())
            }
        };
        cubes.push((line_no, inputs, output));
    }

    let num_inputs = match num_inputs {
        Some(n) => n,
        None => cubes
            .first()
            .map(|(_, inputs, _)| inputs.len())
            .ok_or(PlaError::MissingInputDirective)?,
    };
    let variable_count = VariableCount::new(num_inputs)?;
    let layout = variable_count.layout();

    let mut grid = Grid::from_minterms_with(num_inputs, &[], config)?;
    for (line, inputs, output) in &cubes {
        let cube = parse_inputs(inputs, num_inputs, *line)?;
        match *output {
            '1' | '4' => {}
            '0' | '-' | '2' | '~' => continue,
            character => {
                return Err(PlaError::InvalidOutputCharacter {
                    character,
                    line: *line,
                }
                .into())
            }
        }
        for row in 0..layout.rows() {
            for col in 0..layout.cols() {
                let bits = layout.input_bits(row, col);
                let covered = cube
                    .iter()
                    .zip(&bits)
                    .all(|(slot, &bit)| slot.map_or(true, |v| v == bit));
                if covered {
                    grid = grid.with_value(row as isize, col as isize, true)?;
                }
            }
        }
    }

    Ok(grid)
}

/// Split `"01- 1"` or `"01-1"` into inputs and outputs
fn split_cube(line: &str) -> (String, String) {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(inputs), Some(outputs)) => {
            let rest: String = parts.collect();
            (inputs.to_string(), format!("{}{}", outputs, rest))
        }
        (Some(joined), None) if joined.len() > 1 => {
            let (inputs, outputs) = joined.split_at(joined.len() - 1);
            (inputs.to_string(), outputs.to_string())
        }
        (Some(joined), None) => (joined.to_string(), String::new()),
        (None, _) => (String::new(), String::new()),
    }
}

fn parse_inputs(
    inputs: &str,
    expected: usize,
    line: usize,
) -> Result<Vec<Option<bool>>, PlaError> {
    if inputs.chars().count() != expected {
        return Err(PlaError::CubeDimensionMismatch {
            expected_inputs: expected,
            actual_inputs: inputs.chars().count(),
            line,
        });
    }
    inputs
        .chars()
        .enumerate()
        .map(|(position, character)| match character {
            '0' => Ok(Some(false)),
            '1' => Ok(Some(true)),
            '-' | '2' => Ok(None),
            _ => Err(PlaError::InvalidInputCharacter {
                character,
                position,
                line,
            }),
        })
        .collect()
}
