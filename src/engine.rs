use std::error::Error;
use std::fmt;

use itertools::Itertools;
use ndarray::{ArrayD, ArrayViewD, IxDyn};
use rayon::prelude::*;

use crate::neighborhood::{window, RetrievalMode};
use crate::{Grid, GridSource, RuleChain};

/// Rejected engine configurations.
///
/// All of these are detected at construction; a misconfigured engine is never
/// handed out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The neighborhood shape and the grid have different dimensionality.
    DimensionMismatch { grid: usize, neighborhood: usize },
    /// The grid has a zero-length axis.
    EmptyGrid,
    /// The neighborhood shape has a zero-length axis.
    EmptyNeighborhood,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DimensionMismatch { grid, neighborhood } => write!(
                f,
                "neighborhood shape has {} dimensions but the grid has {}",
                neighborhood, grid
            ),
            ConfigError::EmptyGrid => write!(f, "grid has a zero-length axis"),
            ConfigError::EmptyNeighborhood => {
                write!(f, "neighborhood shape has a zero-length axis")
            }
        }
    }
}

impl Error for ConfigError {}

/// Advances a grid one generation at a time.
///
/// The engine owns the current generation exclusively. Every step reads all
/// neighborhoods from the previous generation and writes into a fresh buffer,
/// so the result cannot depend on the order cells are visited in.
pub struct Engine<C> {
    grid: Grid<C>,
    rules: RuleChain<C>,
    neighborhood_shape: Vec<usize>,
    retrieval_mode: RetrievalMode,
    steps: usize,
}

impl<C> Engine<C>
where
    C: Clone + Default,
{
    /// Make an engine with the 3x3 Moore window and wrapping edges.
    pub fn new(
        source: impl Into<GridSource<C>>,
        rules: impl Into<RuleChain<C>>,
    ) -> Result<Self, ConfigError> {
        Self::with_configuration(source, rules, &[3, 3], RetrievalMode::Wrapping)
    }

    /// Make an engine with an explicit neighborhood shape and retrieval mode.
    ///
    /// The neighborhood shape must have exactly one extent per grid dimension;
    /// a mismatch is rejected rather than truncated or padded.
    pub fn with_configuration(
        source: impl Into<GridSource<C>>,
        rules: impl Into<RuleChain<C>>,
        neighborhood_shape: &[usize],
        retrieval_mode: RetrievalMode,
    ) -> Result<Self, ConfigError> {
        let grid = Grid::new(source);
        if grid.shape().iter().any(|&extent| extent == 0) {
            return Err(ConfigError::EmptyGrid);
        }
        if neighborhood_shape.len() != grid.ndim() {
            return Err(ConfigError::DimensionMismatch {
                grid: grid.ndim(),
                neighborhood: neighborhood_shape.len(),
            });
        }
        if neighborhood_shape.iter().any(|&extent| extent == 0) {
            return Err(ConfigError::EmptyNeighborhood);
        }
        Ok(Engine {
            grid,
            rules: rules.into(),
            neighborhood_shape: neighborhood_shape.to_vec(),
            retrieval_mode,
            steps: 0,
        })
    }

    /// Advance by one generation.
    ///
    /// Returns the step index, starting at 0 and incrementing on every call,
    /// together with a view of the new generation. A panicking rule unwinds
    /// through this call; the in-progress buffer is dropped and the previous
    /// generation stays current.
    pub fn step(&mut self) -> (usize, ArrayViewD<'_, C>) {
        let mut next = ArrayD::from_elem(IxDyn(self.grid.shape()), C::default());
        for index in self.coordinates() {
            next[&index[..]] = self.evolve(&index);
        }
        self.publish(next)
    }

    /// Advance by one generation, computing cells in parallel.
    ///
    /// Identical to [`Engine::step`] in every observable way: each worker
    /// reads only the frozen previous generation and writes its own cell of
    /// the next one.
    pub fn step_parallel(&mut self) -> (usize, ArrayViewD<'_, C>)
    where
        C: Send + Sync,
    {
        let coordinates: Vec<Vec<usize>> = self.coordinates().collect();
        let cells = self.grid.cells();
        let rules = &self.rules;
        let neighborhood_shape = &self.neighborhood_shape;
        let retrieval_mode = self.retrieval_mode;
        let values: Vec<C> = coordinates
            .par_iter()
            .map(|index| evolve(cells, rules, neighborhood_shape, retrieval_mode, index))
            .collect();
        let next = ArrayD::from_shape_vec(IxDyn(self.grid.shape()), values)
            .expect("cellgrid::Engine::step_parallel: buffer size differs from grid shape");
        self.publish(next)
    }

    /// Re-seed the grid from its original literal or generator.
    ///
    /// The step index is not reset; it keeps counting across the re-seed.
    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// A read-only view of the current generation.
    #[inline]
    pub fn cells(&self) -> ArrayViewD<'_, C> {
        self.grid.current()
    }

    /// The neighborhood window the rules would see at `index`.
    pub fn neighborhood(&self, index: &[usize]) -> ArrayD<C> {
        window(
            self.grid.current(),
            index,
            &self.neighborhood_shape,
            self.retrieval_mode,
        )
    }

    /// The number of generations computed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The neighborhood window shape.
    #[inline]
    pub fn neighborhood_shape(&self) -> &[usize] {
        &self.neighborhood_shape
    }

    /// The boundary retrieval mode.
    #[inline]
    pub fn retrieval_mode(&self) -> RetrievalMode {
        self.retrieval_mode
    }

    fn coordinates(&self) -> impl Iterator<Item = Vec<usize>> {
        self.grid
            .shape()
            .to_vec()
            .into_iter()
            .map(|extent| 0..extent)
            .multi_cartesian_product()
    }

    #[inline]
    fn evolve(&self, index: &[usize]) -> C {
        evolve(
            self.grid.cells(),
            &self.rules,
            &self.neighborhood_shape,
            self.retrieval_mode,
            index,
        )
    }

    fn publish(&mut self, next: ArrayD<C>) -> (usize, ArrayViewD<'_, C>) {
        self.grid.replace(next);
        let step = self.steps;
        self.steps += 1;
        (step, self.grid.current())
    }
}

/// Compute one cell of the next generation from the previous one.
fn evolve<C>(
    cells: &ArrayD<C>,
    rules: &RuleChain<C>,
    neighborhood_shape: &[usize],
    retrieval_mode: RetrievalMode,
    index: &[usize],
) -> C
where
    C: Clone + Default,
{
    let neighborhood = window(cells.view(), index, neighborhood_shape, retrieval_mode);
    match rules {
        RuleChain::FirstMatch(rules) => rules
            .iter()
            .find_map(|rule| rule(neighborhood.view()))
            .unwrap_or_else(|| cells[index].clone()),
        RuleChain::Stateful(rule) => rule(neighborhood.view(), cells[index].clone()),
    }
}
