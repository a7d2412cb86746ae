//! Cellgrid is a library for stepping cellular automata on n-dimensional grids.
//!
//! An [`Engine`] owns a grid of cells, a neighborhood window shape, a boundary
//! [`RetrievalMode`], and a [`RuleChain`]. Each call to [`Engine::step`] reads
//! every cell's neighborhood from the previous generation, evaluates the rule
//! chain against it, and publishes a wholly new generation together with its
//! step index. Cells never observe a half-updated grid.

mod engine;
mod grid;
mod neighborhood;
pub mod rules;

pub use engine::*;
pub use grid::*;
pub use neighborhood::*;

use ndarray::ArrayViewD;

/// One link of a first-match rule chain: a pure function from a neighborhood
/// window to an optional next state. Returning `Some` claims the cell and
/// short-circuits the rest of the chain.
pub type Rule<C> = Box<dyn Fn(ArrayViewD<'_, C>) -> Option<C> + Send + Sync>;

/// A rule that always decides the next state from the neighborhood window and
/// the focal cell's current state.
pub type CellRule<C> = Box<dyn Fn(ArrayViewD<'_, C>, C) -> C + Send + Sync>;

/// The per-cell decision procedure of an [`Engine`].
///
/// The two variants correspond to the two supported rule shapes: an ordered
/// list of optional-returning rules where the first match wins and unmatched
/// cells keep their state, or a single rule that also sees the focal cell's
/// current state and always produces the next one.
pub enum RuleChain<C> {
    FirstMatch(Vec<Rule<C>>),
    Stateful(CellRule<C>),
}

impl<C> RuleChain<C> {
    /// Chain rules evaluated in order until one returns `Some`.
    pub fn first_match(rules: Vec<Rule<C>>) -> Self {
        RuleChain::FirstMatch(rules)
    }

    /// A single rule evaluated once per cell with the cell's current state.
    pub fn stateful(
        rule: impl Fn(ArrayViewD<'_, C>, C) -> C + Send + Sync + 'static,
    ) -> Self {
        RuleChain::Stateful(Box::new(rule))
    }
}
