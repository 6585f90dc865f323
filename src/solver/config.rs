use crate::canon::Buckets;
use crate::cards::Street;
use crate::error::Error;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// full-ring opening range for the player closing the action
pub const DEFAULT_RANGE_IP: &str =
    "22+,A2s+,K6s+,Q8s+,J8s+,T8s+,97s+,86s+,75s+,65s,54s,A9o+,KTo+,QTo+,JTo";
/// tighter range for the player acting first
pub const DEFAULT_RANGE_OOP: &str =
    "22+,A2s+,K9s+,QTs+,JTs,T9s,98s,87s,ATo+,KJo+,QJo";

/// everything the external solver needs beyond the spot itself.
/// deserializable from a JSON file; every field has a sane default so
/// a config file only states its overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// path to the solver binary
    pub binary: PathBuf,
    /// resource directory passed through to the binary. when absent we
    /// look for a `resources` directory next to the binary.
    pub resources: Option<PathBuf>,
    pub threads: usize,
    /// target exploitability, percent of pot
    pub accuracy: f32,
    pub iterations: usize,
    pub isomorphism: bool,
    /// stack-to-pot ratio below which only shoving is offered
    pub allin_threshold: f32,
    /// tree depth retained in the dump
    pub dump_rounds: usize,
    pub range_ip: String,
    pub range_oop: String,
    /// bet and raise sizes per street, percent of pot
    pub bets: BTreeMap<Street, Vec<u32>>,
    /// hard wall clock per solve
    pub timeout: Duration,
    /// simultaneous solver processes
    pub slots: usize,
    pub input_flag: String,
    pub resource_flag: String,
    pub dump_file: String,
    pub buckets: Buckets,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("texas_solver"),
            resources: None,
            threads: num_cpus::get(),
            accuracy: 0.3,
            iterations: 1000,
            isomorphism: true,
            allin_threshold: 0.67,
            dump_rounds: 2,
            range_ip: DEFAULT_RANGE_IP.to_string(),
            range_oop: DEFAULT_RANGE_OOP.to_string(),
            bets: BTreeMap::from([
                (Street::Flop, vec![33, 50, 75]),
                (Street::Turn, vec![50, 75, 100]),
                (Street::Rive, vec![50, 75, 100]),
            ]),
            timeout: Duration::from_secs(300),
            slots: 2,
            input_flag: String::from("--input_file"),
            resource_flag: String::from("--resource_dir"),
            dump_file: String::from("output_result.json"),
            buckets: Buckets::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Configuration(format!("unreadable config {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Configuration(format!("malformed config {}: {}", path.display(), e)))
    }

    pub fn check(&self) -> Result<(), Error> {
        if self.accuracy <= 0.0 {
            Err(Error::Configuration(format!("accuracy must be positive: {}", self.accuracy)))
        } else if self.iterations == 0 {
            Err(Error::Configuration("iterations must be positive".into()))
        } else if self.threads == 0 {
            Err(Error::Configuration("threads must be positive".into()))
        } else if self.slots == 0 {
            Err(Error::Configuration("slots must be positive".into()))
        } else if self.timeout.is_zero() {
            Err(Error::Configuration("timeout must be positive".into()))
        } else if self.range_ip.is_empty() || self.range_oop.is_empty() {
            Err(Error::Configuration("ranges must be nonempty".into()))
        } else {
            Ok(())
        }
    }

    /// explicit resource dir, or one sitting next to the binary
    pub fn resources(&self) -> Option<PathBuf> {
        self.resources.clone().or_else(|| {
            let sibling = self.binary.parent()?.join("resources");
            sibling.is_dir().then_some(sibling)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.accuracy == 0.3);
        assert!(config.iterations == 1000);
        assert!(config.isomorphism);
        assert!(config.allin_threshold == 0.67);
        assert!(config.dump_rounds == 2);
        assert!(config.bets[&Street::Flop] == vec![33, 50, 75]);
        assert!(config.check().is_ok());
    }

    #[test]
    fn partial_overrides_deserialize() {
        let config: Config =
            serde_json::from_str(r#"{"threads": 4, "accuracy": 0.5, "iterations": 500}"#).unwrap();
        assert!(config.threads == 4);
        assert!(config.accuracy == 0.5);
        assert!(config.iterations == 500);
        assert!(config.isomorphism);
    }

    #[test]
    fn rejects_degenerate_values() {
        let mut config = Config::default();
        config.accuracy = 0.0;
        assert!(config.check().is_err());
        let mut config = Config::default();
        config.slots = 0;
        assert!(config.check().is_err());
        let mut config = Config::default();
        config.range_ip.clear();
        assert!(config.check().is_err());
    }
}
