use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// normalization grids for the continuous dimensions of a spot.
/// coarser grids trade key precision for cache hit rate, so both are
/// tunable rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Buckets {
    /// stack depth granularity, in big blinds
    #[serde(default = "Buckets::default_stack_grid")]
    pub stack_grid: Chips,
    /// pot-to-stack ratio granularity
    #[serde(default = "Buckets::default_pot_grid")]
    pub pot_grid: f32,
}

impl Buckets {
    fn default_stack_grid() -> Chips {
        100.0
    }
    fn default_pot_grid() -> f32 {
        0.05
    }

    /// stack depth rounded onto the bb grid
    pub fn stack(&self, stack: Chips) -> u32 {
        (stack / self.stack_grid).round() as u32
    }

    /// pot as a percentage of effective stack, rounded onto the ratio grid
    pub fn pot(&self, pot: Chips, stack: Chips) -> u32 {
        let ratio = (pot / stack / self.pot_grid).round() * self.pot_grid;
        (ratio * 100.0).round() as u32
    }
}

impl Default for Buckets {
    fn default() -> Self {
        Self {
            stack_grid: Self::default_stack_grid(),
            pot_grid: Self::default_pot_grid(),
        }
    }
}
