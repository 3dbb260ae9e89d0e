//! Interactive editing sessions
//!
//! A [`Session`] owns the current map together with everything derived from it.
//! Every edit replaces the map with a new snapshot and recomputes the groups and
//! the expression from scratch; nothing is patched incrementally.

use crate::error::KarnaughError;
use crate::grid::{generate_grid_with_rng, toggle_cell, Grid};
use crate::group::{find_groups, Group};
use crate::term::{build_expression_with, terms};
use crate::KarnaughConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// The state behind one interactive Karnaugh map
///
/// # Examples
///
/// ```
/// use karnaugh_logic::Session;
///
/// let mut session = Session::with_seed(2, 42).unwrap();
/// let before = session.grid().value_at(0, 0).unwrap();
///
/// session.toggle(0, 0).unwrap();
/// assert_ne!(session.grid().value_at(0, 0).unwrap(), before);
///
/// // Groups and expression always describe the current map
/// let ones: usize = session.groups().iter().map(|g| g.size()).sum();
/// assert_eq!(ones, session.grid().ones());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: KarnaughConfig,
    rng: ChaCha8Rng,
    grid: Grid,
    groups: Vec<Group>,
    expression: String,
}

impl Session {
    /// Start a session on a random map, seeded from system entropy
    pub fn new(variable_count: usize) -> Result<Self, KarnaughError> {
        Self::from_rng(
            variable_count,
            KarnaughConfig::default(),
            ChaCha8Rng::from_entropy(),
        )
    }

    /// Start a session whose random maps are reproducible from `seed`
    pub fn with_seed(variable_count: usize, seed: u64) -> Result<Self, KarnaughError> {
        Self::with_config(variable_count, KarnaughConfig::default(), Some(seed))
    }

    /// Start a session with an explicit configuration
    ///
    /// Without a seed the generator is seeded from system entropy.
    pub fn with_config(
        variable_count: usize,
        config: KarnaughConfig,
        seed: Option<u64>,
    ) -> Result<Self, KarnaughError> {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::from_rng(variable_count, config, rng)
    }

    fn from_rng(
        variable_count: usize,
        config: KarnaughConfig,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, KarnaughError> {
        let grid = generate_grid_with_rng(variable_count, &config, &mut rng)?;
        Ok(Self::assemble(config, rng, grid))
    }

    fn assemble(config: KarnaughConfig, rng: ChaCha8Rng, grid: Grid) -> Self {
        let mut session = Session {
            config,
            rng,
            grid,
            groups: Vec::new(),
            expression: String::new(),
        };
        session.recompute();
        session
    }

    fn recompute(&mut self) {
        self.groups = find_groups(&self.grid);
        self.expression =
            build_expression_with(&self.groups, self.grid.variable_count(), &self.config);
        debug!(
            variables = self.grid.variable_count().get(),
            ones = self.grid.ones(),
            groups = self.groups.len(),
            expression = %self.expression,
            "recomputed map"
        );
    }

    /// Replace the map with a new random one of the same size
    pub fn regenerate(&mut self) {
        self.grid = Grid::random(self.grid.variable_count(), &self.config, &mut self.rng);
        self.recompute();
    }

    /// Switch to a random map with `variable_count` variables
    ///
    /// On error the session keeps its current map.
    pub fn set_variable_count(&mut self, variable_count: usize) -> Result<(), KarnaughError> {
        self.grid = generate_grid_with_rng(variable_count, &self.config, &mut self.rng)?;
        self.recompute();
        Ok(())
    }

    /// Flip one cell
    ///
    /// On error the session keeps its current map.
    pub fn toggle(&mut self, row: isize, col: isize) -> Result<(), KarnaughError> {
        self.grid = toggle_cell(&self.grid, row, col)?;
        self.recompute();
        Ok(())
    }

    /// Adopt a map built elsewhere
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.recompute();
    }

    /// The current map
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Groups of the current map, in discovery order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Sum-of-products expression of the current map
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Product term of each group, in discovery order
    pub fn terms(&self) -> Vec<String> {
        terms(&self.groups, self.grid.variable_count(), &self.config)
    }

    /// Configuration in effect
    pub fn config(&self) -> &KarnaughConfig {
        &self.config
    }
}
