//! Product term and sum-of-products derivation
//!
//! Each group becomes one product term. A variable that is constant across the
//! group contributes a literal (asserted for 1, complemented for 0); a variable
//! that takes both values is eliminated. The expression joins the terms with
//! `" + "` in group discovery order.

use crate::group::Group;
use crate::layout::VariableCount;
use crate::KarnaughConfig;

/// How terms are derived for 3 and 4 variable maps
///
/// 2 variable maps always get real literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermStyle {
    /// `Term N` labels, numbered from 1 in discovery order
    #[default]
    Placeholder,
    /// Literals for every variable that is constant across the group
    Literals,
}

/// Notation for literals and products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `A'B` - postfix prime for complement, juxtaposition for AND
    #[default]
    Prime,
    /// `~A * B` - prefix tilde for complement, `*` for AND
    Tilde,
}

/// A variable in asserted or complemented form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    /// Variable name
    pub variable: char,
    /// `true` for the variable itself, `false` for its complement
    pub asserted: bool,
}

impl Literal {
    /// Render the literal in the given notation
    pub fn render(&self, notation: Notation) -> String {
        match (notation, self.asserted) {
            (_, true) => self.variable.to_string(),
            (Notation::Prime, false) => format!("{}'", self.variable),
            (Notation::Tilde, false) => format!("~{}", self.variable),
        }
    }
}

/// Literals of the product term covering `group`
///
/// Literals are taken from the map the group was found on. Empty when every
/// variable is eliminated, i.e. the group spans the whole map.
pub fn literals(group: &Group) -> Vec<Literal> {
    if group.variable_count() == VariableCount::Two {
        return two_variable_literals(group);
    }
    group
        .cube()
        .into_iter()
        .zip(group.variable_count().variables())
        .filter_map(|(slot, &variable)| {
            slot.map(|asserted| Literal { variable, asserted })
        })
        .collect()
}

/// A group confined to one row keeps the row variable, one confined to one
/// column keeps the column variable
fn two_variable_literals(group: &Group) -> Vec<Literal> {
    let layout = group.variable_count().layout();
    [
        (group.rows_spanned(), layout.row_gray(), layout.row_variables()),
        (group.cols_spanned(), layout.col_gray(), layout.col_variables()),
    ]
    .into_iter()
    .filter_map(|(spanned, labels, variables)| {
        if spanned.len() != 1 {
            return None;
        }
        let index = *spanned.first()?;
        Some(Literal {
            variable: *variables.first()?,
            asserted: *labels.get(index)? == "1",
        })
    })
    .collect()
}

/// Product term for the group at `group_index`
///
/// For 2 variable maps a group confined to row 0 keeps `A'`, to row 1 keeps
/// `A`, and one spanning both rows drops A; columns map to B the same way. If
/// both variables drop out the term reads `Group N`. 3 and 4 variable maps get
/// the `Term N` placeholder under the default configuration.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::{derive_term, find_groups, Grid, VariableCount};
///
/// let grid = Grid::from_rows(&[[1, 1], [0, 0]]).unwrap();
/// let groups = find_groups(&grid);
/// assert_eq!(derive_term(&groups[0], VariableCount::Two, 0), "A'");
/// ```
pub fn derive_term(group: &Group, variable_count: VariableCount, group_index: usize) -> String {
    derive_term_with(group, variable_count, group_index, &KarnaughConfig::default())
}

/// [`derive_term`] with an explicit configuration
///
/// `variable_count` selects between placeholder and literal terms; the
/// literals themselves always come from the group's own map, so a mismatched
/// count never reads outside the map.
pub fn derive_term_with(
    group: &Group,
    variable_count: VariableCount,
    group_index: usize,
    config: &KarnaughConfig,
) -> String {
    if variable_count != VariableCount::Two && config.term_style == TermStyle::Placeholder {
        return format!("Term {}", group_index + 1);
    }

    let literals = literals(group);
    if literals.is_empty() {
        return format!("Group {}", group_index + 1);
    }

    match config.notation {
        Notation::Prime => literals
            .iter()
            .map(|literal| literal.render(Notation::Prime))
            .collect(),
        Notation::Tilde => literals
            .iter()
            .map(|literal| literal.render(Notation::Tilde))
            .collect::<Vec<_>>()
            .join(" * "),
    }
}

/// Terms for every group, in discovery order
pub fn terms(
    groups: &[Group],
    variable_count: VariableCount,
    config: &KarnaughConfig,
) -> Vec<String> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| derive_term_with(group, variable_count, index, config))
        .collect()
}

/// Sum-of-products expression over `groups`
///
/// Returns `"0"` when there are no groups.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::{build_expression, find_groups, Grid, VariableCount};
///
/// let grid = Grid::from_rows(&[[1, 0], [0, 1]]).unwrap();
/// let groups = find_groups(&grid);
/// assert_eq!(build_expression(&groups, VariableCount::Two), "A'B' + AB");
///
/// let empty = Grid::from_rows(&[[0, 0], [0, 0]]).unwrap();
/// assert_eq!(build_expression(&find_groups(&empty), VariableCount::Two), "0");
/// ```
pub fn build_expression(groups: &[Group], variable_count: VariableCount) -> String {
    build_expression_with(groups, variable_count, &KarnaughConfig::default())
}

/// [`build_expression`] with an explicit configuration
pub fn build_expression_with(
    groups: &[Group],
    variable_count: VariableCount,
    config: &KarnaughConfig,
) -> String {
    if groups.is_empty() {
        return "0".to_string();
    }
    terms(groups, variable_count, config).join(" + ")
}
