use crate::spot::Action;
use crate::Probability;
use crate::Utility;
use crate::FREQUENCY_TOLERANCE;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// one hand's equilibrium play: how often to take each action and what
/// each action is worth. immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    frequencies: BTreeMap<Action, Probability>,
    evs: BTreeMap<Action, Utility>,
}

impl Strategy {
    pub fn new(
        frequencies: BTreeMap<Action, Probability>,
        evs: BTreeMap<Action, Utility>,
    ) -> Result<Self, String> {
        let total = frequencies.values().sum::<Probability>();
        if frequencies.is_empty() {
            return Err("no actions".to_string());
        }
        if (total - 1.0).abs() > FREQUENCY_TOLERANCE {
            return Err(format!("frequencies sum to {}", total));
        }
        for (action, frequency) in &frequencies {
            if *frequency < 0.0 || !frequency.is_finite() {
                return Err(format!("invalid frequency for {}: {}", action, frequency));
            }
            if *frequency > 0.0 && !evs.get(action).is_some_and(|ev| ev.is_finite()) {
                return Err(format!("no finite ev for live action {}", action));
            }
        }
        Ok(Self { frequencies, evs })
    }

    pub fn frequency(&self, action: &Action) -> Probability {
        self.frequencies.get(action).copied().unwrap_or(0.0)
    }

    pub fn ev(&self, action: &Action) -> Option<Utility> {
        self.evs.get(action).copied()
    }

    pub fn actions(&self) -> impl Iterator<Item = (&Action, &Probability)> {
        self.frequencies.iter()
    }

    /// the action taken most often
    pub fn primary(&self) -> Action {
        *self
            .frequencies
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(action, _)| action)
            .expect("strategies are never empty")
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (action, frequency) in &self.frequencies {
            writeln!(
                f,
                "{:<16}{:>6.1}%  ev {:+.2}",
                action.to_string(),
                frequency * 100.0,
                self.ev(action).unwrap_or(0.0),
            )?;
        }
        Ok(())
    }
}
