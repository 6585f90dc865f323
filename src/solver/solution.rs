use super::strategy::Strategy;
use crate::canon::Mapping;
use crate::cards::Hole;
use crate::Energy;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// a solved spot: the full per-hand strategy table plus how close the
/// solver got to equilibrium. hole keys are in whatever suit frame the
/// producer used; `translate` moves the whole table between frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    strategies: BTreeMap<Hole, Strategy>,
    exploitability: Energy,
    iterations: usize,
}

impl Solution {
    pub fn new(
        strategies: BTreeMap<Hole, Strategy>,
        exploitability: Energy,
        iterations: usize,
    ) -> Self {
        Self {
            strategies,
            exploitability,
            iterations,
        }
    }

    pub fn strategy(&self, hole: &Hole) -> Option<&Strategy> {
        self.strategies.get(hole)
    }
    pub fn strategies(&self) -> impl Iterator<Item = (&Hole, &Strategy)> {
        self.strategies.iter()
    }
    pub fn exploitability(&self) -> Energy {
        self.exploitability
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn len(&self) -> usize {
        self.strategies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// relabel every hand through a suit mapping. actions carry no
    /// suits, so only the table keys move.
    pub fn translate(&self, mapping: &Mapping) -> Self {
        Self {
            strategies: self
                .strategies
                .iter()
                .map(|(hole, strategy)| (mapping.hole(*hole), strategy.clone()))
                .collect(),
            exploitability: self.exploitability,
            iterations: self.iterations,
        }
    }
}
