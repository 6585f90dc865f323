use super::bridge::Solver;
use super::solution::Solution;
use super::strategy::Strategy;
use crate::cache::Cache;
use crate::canon::Buckets;
use crate::canon::Key;
use crate::cards::Hole;
use crate::error::Error;
use crate::spot::Spot;
use async_trait::async_trait;
use std::path::Path;

/// cache-only solver over a directory seeded ahead of time. never
/// launches anything; a spot outside the seed set is a typed miss the
/// caller can react to, not a silent guess.
pub struct Precomputed {
    cache: Cache,
    buckets: Buckets,
}

impl Precomputed {
    pub fn open(dir: &Path, buckets: Buckets) -> Result<Self, Error> {
        Ok(Self {
            cache: Cache::open(dir)?,
            buckets,
        })
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }
}

#[async_trait]
impl Solver for Precomputed {
    async fn solve(&self, spot: &Spot) -> Result<Solution, Error> {
        let (key, mapping) = Key::derive(spot, None, &self.buckets)?;
        self.cache
            .get(&key)
            .map(|entry| entry.solution().translate(&mapping.invert()))
            .ok_or_else(|| Error::NotFound(format!("no precomputed solution for {}", key)))
    }

    async fn strategy(&self, spot: &Spot, hole: &Hole) -> Result<Strategy, Error> {
        let (key, mapping) = Key::derive(spot, Some(hole), &self.buckets)?;
        let entry = self
            .cache
            .get(&key)
            .ok_or_else(|| Error::NotFound(format!("no precomputed solution for {}", key)))?;
        entry
            .solution()
            .strategy(&mapping.hole(*hole))
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no strategy for hand {}", hole)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Provenance;
    use crate::cards::Board;
    use crate::spot::Action;
    use crate::spot::Position;
    use std::collections::BTreeMap;

    fn seeded() -> (Precomputed, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let precomputed = Precomputed::open(dir.path(), Buckets::default()).unwrap();
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
        precomputed
            .cache()
            .put(
                Key::from("preflop_d1_p10_ip_AcQd".to_string()),
                solution,
                Provenance::Precomputed,
            )
            .unwrap();
        (precomputed, dir)
    }

    fn spot() -> Spot {
        Spot::new(Board::empty(), 7.5, 100.0, Position::Co, vec![]).unwrap()
    }

    #[tokio::test]
    async fn seeded_spot_resolves() {
        let (precomputed, _dir) = seeded();
        let hole = Hole::try_from("AhQs").unwrap();
        let strategy = precomputed.strategy(&spot(), &hole).await.unwrap();
        assert!(strategy.frequency(&Action::Check) == 1.0);
    }

    #[tokio::test]
    async fn unseeded_spot_is_not_found() {
        let (precomputed, _dir) = seeded();
        let hole = Hole::try_from("7c2d").unwrap();
        let err = precomputed.strategy(&spot(), &hole).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn solve_requires_a_seeded_table() {
        let (precomputed, _dir) = seeded();
        let err = precomputed.solve(&spot()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
