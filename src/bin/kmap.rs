//! Karnaugh map explorer - Command Line Interface
//!
//! Generates or loads a map, applies cell toggles and prints the groups and the
//! sum-of-products expression.

use clap::{Parser, ValueEnum};
use karnaugh_logic::{
    Grid, KarnaughConfig, KarnaughError, MintermOrder, Notation, PlaWriter, Session, TermStyle,
};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TermsArg {
    /// `Term N` labels for 3 and 4 variable maps
    Placeholder,
    /// Literals per variable
    Literals,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NumberingArg {
    /// Row-major numbering
    Positional,
    /// Numbering from the Gray-code labels
    Gray,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NotationArg {
    /// A'B
    Prime,
    /// ~A * B
    Tilde,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Map, group legend and expression
    Text,
    /// Berkeley PLA
    Pla,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlaSource {
    /// One cube per 1-cell
    Minterms,
    /// One cube per group
    Groups,
}

impl From<TermsArg> for TermStyle {
    fn from(val: TermsArg) -> Self {
        match val {
            TermsArg::Placeholder => TermStyle::Placeholder,
            TermsArg::Literals => TermStyle::Literals,
        }
    }
}

impl From<NumberingArg> for MintermOrder {
    fn from(val: NumberingArg) -> Self {
        match val {
            NumberingArg::Positional => MintermOrder::Positional,
            NumberingArg::Gray => MintermOrder::GrayCode,
        }
    }
}

impl From<NotationArg> for Notation {
    fn from(val: NotationArg) -> Self {
        match val {
            NotationArg::Prime => Notation::Prime,
            NotationArg::Tilde => Notation::Tilde,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Karnaugh map grouping and sum-of-products derivation", long_about = None)]
#[command(version)]
struct Args {
    /// Number of variables (2, 3 or 4)
    #[arg(short = 'n', long = "vars", default_value_t = 4)]
    vars: usize,

    /// Seed for the random map
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated minterms to set instead of a random map
    #[arg(short = 'm', long, value_delimiter = ',', conflicts_with = "input")]
    minterms: Option<Vec<u32>>,

    /// Read the map from a PLA file
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Toggle the cell at ROW,COL (repeatable, applied in order)
    #[arg(short = 't', long = "toggle", value_name = "ROW,COL", value_parser = parse_cell)]
    toggles: Vec<(isize, isize)>,

    /// Term derivation for 3 and 4 variable maps
    #[arg(long, value_enum, default_value = "placeholder")]
    terms: TermsArg,

    /// Minterm numbering
    #[arg(long, value_enum, default_value = "positional")]
    numbering: NumberingArg,

    /// Literal notation
    #[arg(long, value_enum, default_value = "prime")]
    notation: NotationArg,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: Format,

    /// What the PLA output describes
    #[arg(long, value_enum, default_value = "minterms")]
    pla_source: PlaSource,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

fn parse_cell(s: &str) -> Result<(isize, isize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{}': {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{}': {}", col, e))?;
    Ok((row, col))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), KarnaughError> {
    let config = KarnaughConfig {
        minterm_order: args.numbering.into(),
        term_style: args.terms.into(),
        notation: args.notation.into(),
    };

    let mut session = Session::with_config(args.vars, config, args.seed)?;

    if let Some(path) = &args.input {
        info!(path = %path.display(), "reading PLA");
        let content = fs::read_to_string(path)?;
        let grid = karnaugh_logic::pla::read_grid(content.as_bytes(), &config)?;
        session.set_grid(grid);
    } else if let Some(minterms) = &args.minterms {
        session.set_grid(Grid::from_minterms_with(args.vars, minterms, &config)?);
    }

    for &(row, col) in &args.toggles {
        info!(row, col, "toggling cell");
        session.toggle(row, col)?;
    }

    let mut output: Vec<u8> = Vec::new();
    match args.format {
        Format::Text => write_report(&mut output, &session)?,
        Format::Pla => match args.pla_source {
            PlaSource::Minterms => session.grid().write_pla(&mut output)?,
            PlaSource::Groups => session.write_pla(&mut output)?,
        },
    }

    match &args.output_file {
        Some(path) => {
            fs::write(path, &output)?;
            info!(path = %path.display(), "wrote output");
        }
        None => io::stdout().write_all(&output)?,
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let grid = session.grid();

    writeln!(out, "{}", grid)?;
    writeln!(out)?;
    writeln!(out, "Minterms: {:?}", grid.minterms())?;

    let terms = session.terms();
    if session.groups().is_empty() {
        writeln!(out, "Groups: none")?;
    } else {
        writeln!(out, "Groups:")?;
        for (group, term) in session.groups().iter().zip(&terms) {
            let cells: Vec<String> = group
                .cells()
                .iter()
                .map(|(row, col)| format!("({},{})", row, col))
                .collect();
            writeln!(
                out,
                "  {:>2}. size {:>2}  {:<10} {}{}",
                group.index() + 1,
                group.size(),
                term,
                cells.join(" "),
                if group.is_implicant() {
                    ""
                } else {
                    "  [not an implicant]"
                }
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "F = {}", session.expression())?;
    Ok(())
}
