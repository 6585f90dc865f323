use crate::canon::Key;
use crate::solver::Solution;
use serde::Deserialize;
use serde::Serialize;
use std::time::SystemTime;

/// where a cached solution came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// seeded in bulk ahead of time
    Precomputed,
    /// solved on demand by the bridge
    Dynamic,
}

/// one cached solution in canonical suit frame. immutable; an entry is
/// only ever replaced wholesale by an explicit overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    key: Key,
    solution: Solution,
    provenance: Provenance,
    created: SystemTime,
}

impl Entry {
    pub fn new(key: Key, solution: Solution, provenance: Provenance) -> Self {
        Self {
            key,
            solution,
            provenance,
            created: SystemTime::now(),
        }
    }
    pub fn key(&self) -> &Key {
        &self.key
    }
    pub fn solution(&self) -> &Solution {
        &self.solution
    }
    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
    pub fn created(&self) -> SystemTime {
        self.created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hole;
    use crate::solver::Strategy;
    use crate::spot::Action;
    use std::collections::BTreeMap;

    #[test]
    fn serde_round_trip() {
        let strategy = Strategy::new(
            BTreeMap::from([(Action::Check, 1.0)]),
            BTreeMap::from([(Action::Check, 0.0)]),
        )
        .unwrap();
        let solution = Solution::new(
            BTreeMap::from([(Hole::try_from("AcQd").unwrap(), strategy)]),
            0.3,
            100,
        );
        let entry = Entry::new(
            Key::from("preflop_d1_p10_ip".to_string()),
            solution,
            Provenance::Dynamic,
        );
        let json = serde_json::to_string(&entry).unwrap();
        let decoded: Entry = serde_json::from_str(&json).unwrap();
        assert!(decoded == entry);
        assert!(decoded.provenance() == Provenance::Dynamic);
    }
}
