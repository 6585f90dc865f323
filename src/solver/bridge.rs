use super::config::Config;
use super::invocation::Invocation;
use super::output::parse;
use super::runner::BinaryRunner;
use super::runner::Runner;
use super::solution::Solution;
use super::strategy::Strategy;
use crate::cache::Cache;
use crate::cache::Entry;
use crate::canon::Key;
use crate::canon::Mapping;
use crate::cards::Hole;
use crate::error::Error;
use crate::spot::Spot;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// the one question this crate answers: what does equilibrium do here.
/// both realizations speak canonical suits internally and real suits at
/// this boundary.
#[async_trait]
pub trait Solver: Send + Sync {
    /// the full strategy table for a spot, keyed by the caller's suits
    async fn solve(&self, spot: &Spot) -> Result<Solution, Error>;
    /// one hand's strategy. a hand absent from the solved table is a
    /// typed failure, never a made-up default.
    async fn strategy(&self, spot: &Spot, hole: &Hole) -> Result<Strategy, Error>;
}

/// binary-backed solver: canonicalize, consult the cache, and only then
/// pay for an external process. a semaphore bounds how many solver
/// processes run at once; waiters queue in arrival order.
pub struct Bridge {
    config: Config,
    cache: Cache,
    runner: Arc<dyn Runner>,
    slots: Arc<Semaphore>,
}

impl Bridge {
    pub fn new(config: Config, cache_dir: &Path) -> Result<Self, Error> {
        let cache = Cache::open(cache_dir)?;
        Self::with_runner(config, cache, Arc::new(BinaryRunner))
    }

    /// construction validates everything a run would need, so a missing
    /// binary fails loudly here instead of on the first solve.
    pub fn with_runner(
        config: Config,
        cache: Cache,
        runner: Arc<dyn Runner>,
    ) -> Result<Self, Error> {
        config.check()?;
        if !config.binary.is_file() {
            return Err(Error::Spawn {
                program: config.binary.display().to_string(),
                reason: "binary not found".to_string(),
            });
        }
        let slots = Arc::new(Semaphore::new(config.slots));
        log::info!("{:<32}{}", "solver bridge ready", config.binary.display());
        Ok(Self {
            config,
            cache,
            runner,
            slots,
        })
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    async fn lookup(&self, spot: &Spot, hole: Option<&Hole>) -> Result<(Arc<Entry>, Mapping), Error> {
        let (key, mapping) = Key::derive(spot, hole, &self.config.buckets)?;
        // the invocation is only materialized on a miss, inside the
        // single-flight computation; a warm key never pays for it
        let spot = spot.clone();
        let config = self.config.clone();
        let runner = self.runner.clone();
        let slots = self.slots.clone();
        let limit = self.config.timeout;
        let entry = self
            .cache
            .load(key, move || async move {
                let invocation = Invocation::build(&spot, &mapping, &config)?;
                let _slot = slots
                    .acquire_owned()
                    .await
                    .expect("slot pool never closes");
                let raw = runner.run(&invocation, limit).await?;
                parse(&raw)
            })
            .await?;
        Ok((entry, mapping))
    }
}

#[async_trait]
impl Solver for Bridge {
    async fn solve(&self, spot: &Spot) -> Result<Solution, Error> {
        let (entry, mapping) = self.lookup(spot, None).await?;
        Ok(entry.solution().translate(&mapping.invert()))
    }

    async fn strategy(&self, spot: &Spot, hole: &Hole) -> Result<Strategy, Error> {
        let (entry, mapping) = self.lookup(spot, Some(hole)).await?;
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
    use crate::cards::Board;
    use crate::solver::RawOutput;
    use crate::spot::Position;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    /// counts executions and replays a fixed dump
    struct StubRunner {
        calls: AtomicUsize,
        dump: String,
    }

    #[async_trait]
    impl Runner for StubRunner {
        async fn run(&self, _: &Invocation, _: Duration) -> Result<RawOutput, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RawOutput {
                dump: self.dump.clone(),
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    const DUMP: &str = r#"{
        "exploitability": 0.28,
        "iterations": 420,
        "strategies": {
            "AcQd": {
                "actions": {"check": 0.25, "bet 7.5": 0.75},
                "evs": {"check": 1.1, "bet 7.5": 1.4}
            }
        }
    }"#;

    struct Rig {
        bridge: Arc<Bridge>,
        runner: Arc<StubRunner>,
        _dirs: (tempfile::TempDir, tempfile::TempDir),
    }

    fn rig(dump: &str) -> Rig {
        let binary_dir = tempfile::tempdir().unwrap();
        let cache_dir = tempfile::tempdir().unwrap();
        let binary = binary_dir.path().join("solver");
        std::fs::write(&binary, "").unwrap();
        let mut config = Config::default();
        config.binary = binary;
        let runner = Arc::new(StubRunner {
            calls: AtomicUsize::new(0),
            dump: dump.to_string(),
        });
        let cache = Cache::open(cache_dir.path()).unwrap();
        let bridge = Arc::new(Bridge::with_runner(config, cache, runner.clone()).unwrap());
        Rig {
            bridge,
            runner,
            _dirs: (binary_dir, cache_dir),
        }
    }

    fn preflop(position: Position) -> Spot {
        Spot::new(Board::empty(), 7.5, 100.0, position, vec![]).unwrap()
    }

    #[tokio::test]
    async fn suit_symmetric_hands_share_one_solve() {
        let rig = rig(DUMP);
        let spot = preflop(Position::Co);
        let a = Hole::try_from("AhQs").unwrap();
        let b = Hole::try_from("AsQh").unwrap();
        let first = rig.bridge.strategy(&spot, &a).await.unwrap();
        let second = rig.bridge.strategy(&spot, &b).await.unwrap();
        assert!(first == second);
        assert!(rig.runner.calls.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test]
    async fn warm_key_never_reruns_the_solver() {
        let rig = rig(DUMP);
        let spot = preflop(Position::Co);
        rig.bridge.solve(&spot).await.unwrap();
        rig.bridge.solve(&spot).await.unwrap();
        rig.bridge.solve(&spot).await.unwrap();
        assert!(rig.runner.calls.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test]
    async fn solutions_come_back_in_real_suits() {
        let rig = rig(DUMP);
        let spot = preflop(Position::Co);
        let hole = Hole::try_from("AhQs").unwrap();
        let solved = rig.bridge.strategy(&spot, &hole).await;
        assert!(solved.is_ok());
        let table = rig.bridge.solve(&spot).await.unwrap();
        assert!(table.len() == 1);
    }

    #[tokio::test]
    async fn malformed_dump_is_parse_error_and_not_cached() {
        let rig = rig("{\"exploitability\":");
        let spot = preflop(Position::Co);
        let err = rig.bridge.solve(&spot).await.unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(rig.bridge.cache().stats().size == 0);
    }

    #[tokio::test]
    async fn missing_hand_is_not_found() {
        let rig = rig(DUMP);
        let spot = preflop(Position::Co);
        let hole = Hole::try_from("7c2d").unwrap();
        let err = rig.bridge.strategy(&spot, &hole).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_execution() {
        let rig = rig(DUMP);
        let mut waiters = Vec::new();
        for _ in 0..8 {
            let bridge = rig.bridge.clone();
            waiters.push(tokio::spawn(async move {
                bridge.solve(&preflop(Position::Co)).await
            }));
        }
        for waiter in waiters {
            assert!(waiter.await.unwrap().is_ok());
        }
        assert!(rig.runner.calls.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test]
    async fn warm_hit_survives_invocation_config_gaps() {
        use crate::cache::Provenance;
        use crate::canon::Buckets;
        use crate::solver::Strategy;
        use crate::spot::Action;
        use std::collections::BTreeMap;
        let binary_dir = tempfile::tempdir().unwrap();
        let cache_dir = tempfile::tempdir().unwrap();
        let binary = binary_dir.path().join("solver");
        std::fs::write(&binary, "").unwrap();
        let mut config = Config::default();
        config.binary = binary;
        config.bets.clear(); // invocations cannot be built at all
        let cache = Cache::open(cache_dir.path()).unwrap();
        let spot = preflop(Position::Co);
        let (key, _) = Key::derive(&spot, None, &Buckets::default()).unwrap();
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
        cache.put(key, solution, Provenance::Precomputed).unwrap();
        let runner = Arc::new(StubRunner {
            calls: AtomicUsize::new(0),
            dump: DUMP.to_string(),
        });
        let bridge = Bridge::with_runner(config, cache, runner.clone()).unwrap();
        let solved = bridge.solve(&spot).await.unwrap();
        assert!(solved.len() == 1);
        assert!(runner.calls.load(Ordering::SeqCst) == 0);
        // a cold key with the same config still surfaces the gap
        let cold = Spot::new(
            Board::try_from("Qs,Jh,2h").unwrap(),
            12.0,
            100.0,
            Position::Btn,
            vec![],
        )
        .unwrap();
        let err = bridge.solve(&cold).await.unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[tokio::test]
    async fn missing_binary_fails_construction() {
        let cache_dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.binary = "/nonexistent/solver".into();
        let cache = Cache::open(cache_dir.path()).unwrap();
        let err = Bridge::with_runner(config, cache, Arc::new(BinaryRunner))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Spawn { .. }));
    }
}
