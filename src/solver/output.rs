use super::runner::RawOutput;
use super::solution::Solution;
use super::strategy::Strategy;
use crate::cards::Hole;
use crate::error::Error;
use crate::excerpt;
use crate::spot::Action;
use serde::Deserialize;
use std::collections::BTreeMap;

/// the dump file's JSON schema
#[derive(Deserialize)]
struct Dump {
    exploitability: f32,
    #[serde(default)]
    iterations: usize,
    strategies: BTreeMap<String, Hand>,
}

#[derive(Deserialize)]
struct Hand {
    actions: BTreeMap<String, f32>,
    evs: BTreeMap<String, f32>,
}

/// decode a solver dump into a typed solution, validating as we go.
/// anything structurally off is a schema mismatch, reported with a
/// bounded excerpt of the raw dump for the log.
pub fn parse(raw: &RawOutput) -> Result<Solution, Error> {
    let bad = |reason: String| Error::Parse {
        reason,
        excerpt: excerpt(&raw.dump),
    };
    let dump = serde_json::from_str::<Dump>(&raw.dump).map_err(|e| bad(e.to_string()))?;
    if !dump.exploitability.is_finite() || dump.exploitability < 0.0 {
        return Err(bad(format!(
            "invalid exploitability: {}",
            dump.exploitability
        )));
    }
    let mut strategies = BTreeMap::new();
    for (hand, entry) in dump.strategies {
        let hole = Hole::try_from(hand.as_str())
            .map_err(|_| bad(format!("invalid hand label: {}", hand)))?;
        let frequencies = actions(&entry.actions, &hand).map_err(&bad)?;
        let evs = actions(&entry.evs, &hand).map_err(&bad)?;
        let strategy = Strategy::new(frequencies, evs)
            .map_err(|e| bad(format!("invalid strategy for {}: {}", hand, e)))?;
        strategies.insert(hole, strategy);
    }
    if strategies.is_empty() {
        return Err(bad("empty strategy table".to_string()));
    }
    Ok(Solution::new(
        strategies,
        dump.exploitability,
        dump.iterations,
    ))
}

fn actions(raw: &BTreeMap<String, f32>, hand: &str) -> Result<BTreeMap<Action, f32>, String> {
    raw.iter()
        .map(|(label, value)| {
            label
                .parse::<Action>()
                .map(|action| (action, *value))
                .map_err(|_| format!("invalid action label for {}: {}", hand, label))
        })
        .collect()
}
