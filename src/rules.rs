//! The canonical life-like rules.
//!
//! Both variants of the classic rule are provided: [`GameOfLife`] as a single
//! stateful rule, and [`overpopulation`]/[`reproduction`]/[`underpopulation`]
//! as a first-match chain with the same semantics. Every rule counts live
//! neighbors as the window sum minus the focal cell's own value, so it works
//! with any window shape and dimensionality.

use boolinator::Boolinator;
use ndarray::ArrayViewD;

use crate::{Rule, RuleChain};

/// Conway-style life rule with configurable thresholds.
///
/// With `s` live neighbors: dies on `s > overpopulation` or
/// `s < underpopulation`, is born on `s == reproduction`, and keeps its
/// current state otherwise. The defaults are Conway's (3, 2, 3).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOfLife {
    pub overpopulation: f64,
    pub underpopulation: f64,
    pub reproduction: f64,
}

impl GameOfLife {
    pub fn new(overpopulation: f64, underpopulation: f64, reproduction: f64) -> Self {
        GameOfLife {
            overpopulation,
            underpopulation,
            reproduction,
        }
    }

    /// The maze variant: thresholds (5, 1, 3), which grows wall-like
    /// corridors out of a random soup.
    pub fn maze() -> Self {
        GameOfLife::new(5.0, 1.0, 3.0)
    }

    /// The next state of a cell with the given neighborhood and current
    /// state.
    pub fn next_state(&self, neighborhood: ArrayViewD<'_, f64>, current: f64) -> f64 {
        let neighbors = neighborhood.sum() - current;
        if neighbors > self.overpopulation || neighbors < self.underpopulation {
            0.0
        } else if neighbors == self.reproduction {
            1.0
        } else {
            current
        }
    }
}

impl Default for GameOfLife {
    fn default() -> Self {
        GameOfLife::new(3.0, 2.0, 3.0)
    }
}

impl From<GameOfLife> for RuleChain<f64> {
    fn from(rule: GameOfLife) -> Self {
        RuleChain::stateful(move |neighborhood, current| rule.next_state(neighborhood, current))
    }
}

/// The number of live neighbors: the window sum minus the focal cell, which
/// sits at the floor-division center of the window.
fn neighbor_sum(neighborhood: &ArrayViewD<'_, f64>) -> f64 {
    let center: Vec<usize> = neighborhood.shape().iter().map(|&extent| extent / 2).collect();
    neighborhood.sum() - neighborhood[&center[..]]
}

/// Kills the focal cell when it has more than `limit` live neighbors.
pub fn overpopulation(limit: f64) -> impl Fn(ArrayViewD<'_, f64>) -> Option<f64> + Send + Sync {
    move |neighborhood| (neighbor_sum(&neighborhood) > limit).as_some(0.0)
}

/// Brings the focal cell to life when it has exactly `target` live neighbors.
pub fn reproduction(target: f64) -> impl Fn(ArrayViewD<'_, f64>) -> Option<f64> + Send + Sync {
    move |neighborhood| (neighbor_sum(&neighborhood) == target).as_some(1.0)
}

/// Kills the focal cell when it has fewer than `limit` live neighbors.
pub fn underpopulation(limit: f64) -> impl Fn(ArrayViewD<'_, f64>) -> Option<f64> + Send + Sync {
    move |neighborhood| (neighbor_sum(&neighborhood) < limit).as_some(0.0)
}

/// Conway's Game of Life as a first-match chain.
///
/// Overpopulation is checked first, then reproduction, then underpopulation;
/// unmatched cells keep their state. Order matters when thresholds overlap.
pub fn life_chain() -> RuleChain<f64> {
    RuleChain::first_match(vec![
        Box::new(overpopulation(3.0)) as Rule<f64>,
        Box::new(reproduction(3.0)),
        Box::new(underpopulation(2.0)),
    ])
}
