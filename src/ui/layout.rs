//! Column sizing model
//!
//! A row is laid out from a list of [`ColumnSpec`]s, one per column. Every
//! column except the `Available` ones is measured first; whatever is left
//! of the terminal width is shared by the `Available` columns.

use super::palette::Pair;
use super::utils::display_width;

/// How a column measures itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Content width, never narrower than `min_width`
    Fit,
    /// Share of the width left over after all other columns
    Available,
    /// Exactly `min_width`
    Fixed,
    /// Exactly the content width, no minimum (tree-branch glyphs)
    Inherit,
}

/// Unit of a width. Terminal cells are the only unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Px,
}

/// Side of the column the content sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Sizing descriptor for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub min_width: usize,
    pub method: Method,
    pub unit: Unit,
    pub align: Align,
    /// Color pair override as `(selected, normal)`
    pub pairs: Option<(Pair, Pair)>,
}

impl ColumnSpec {
    pub const fn new(min_width: usize, method: Method, unit: Unit, align: Align) -> Self {
        Self {
            min_width,
            method,
            unit,
            align,
            pairs: None,
        }
    }

    /// Content width, at least `min_width`, left aligned.
    pub const fn fit(min_width: usize) -> Self {
        Self::new(min_width, Method::Fit, Unit::Px, Align::Left)
    }

    /// Leftover width, left aligned.
    pub const fn available() -> Self {
        Self::new(0, Method::Available, Unit::Px, Align::Left)
    }

    /// Exactly `width`, whatever the content.
    #[allow(dead_code)]
    pub const fn fixed(width: usize) -> Self {
        Self::new(width, Method::Fixed, Unit::Px, Align::Left)
    }

    /// Exactly as wide as the content.
    pub const fn inherit() -> Self {
        Self::new(0, Method::Inherit, Unit::Px, Align::Left)
    }

    pub const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub const fn pairs(mut self, selected: Pair, normal: Pair) -> Self {
        self.pairs = Some((selected, normal));
        self
    }
}

/// Computes the final width of every column.
///
/// The sum of the result never exceeds `total_width`. When the measured
/// columns alone overflow, `Available` columns get nothing and width is
/// taken back from the rightmost `Fit` columns first, then from the
/// rightmost columns of any kind.
pub fn resolve(specs: &[ColumnSpec], contents: &[&str], total_width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let content = contents.get(i).map_or(0, |c| display_width(c));
            match spec.method {
                Method::Fixed => spec.min_width,
                Method::Fit => spec.min_width.max(content),
                Method::Inherit => content,
                Method::Available => 0,
            }
        })
        .collect();

    let used: usize = widths.iter().sum();

    if used > total_width {
        let mut excess = used - total_width;
        let fit_first = (0..specs.len())
            .rev()
            .filter(|&i| specs[i].method == Method::Fit)
            .chain((0..specs.len()).rev());
        for i in fit_first {
            if excess == 0 {
                break;
            }
            let cut = widths[i].min(excess);
            widths[i] -= cut;
            excess -= cut;
        }
        return widths;
    }

    let remaining = total_width - used;
    let available: Vec<usize> = (0..specs.len())
        .filter(|&i| specs[i].method == Method::Available)
        .collect();

    if let Some(&last) = available.last() {
        let share = remaining / available.len();
        for &i in &available {
            widths[i] = share;
        }
        widths[last] += remaining % available.len();
    }

    widths
}
