use super::config::Config;
use crate::canon::Mapping;
use crate::cards::Street;
use crate::error::Error;
use crate::spot::Spot;
use std::path::PathBuf;

/// name of the command script inside the runner's working directory
pub const INPUT_FILE: &str = "input.txt";

/// a fully materialized solver run: the program, its arguments, the
/// command script to write beside it, and the dump file it will leave
/// behind. pure data, so tests can inspect it without spawning anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub script: String,
    pub dump: String,
}

impl Invocation {
    /// translate a spot into the solver's command script. the board is
    /// emitted in canonical suits so the resulting solution keys the
    /// cache consistently.
    pub fn build(spot: &Spot, mapping: &Mapping, config: &Config) -> Result<Self, Error> {
        config.check()?;
        Self::sized(spot, config)?;
        let mut lines = Vec::new();
        lines.push(format!("set_pot {}", spot.pot()));
        lines.push(format!("set_effective_stack {}", spot.stack()));
        let board = mapping
            .normalize(spot.board())
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        if !board.is_empty() {
            lines.push(format!("set_board {}", board));
        }
        lines.push(format!("set_range_ip {}", config.range_ip));
        lines.push(format!("set_range_oop {}", config.range_oop));
        for street in [Street::Flop, Street::Turn, Street::Rive] {
            if let Some(sizes) = config.bets.get(&street) {
                for size in sizes {
                    lines.push(format!("set_bet_sizes oop,{},bet,{}", street, size));
                    lines.push(format!("set_bet_sizes ip,{},bet,{}", street, size));
                    lines.push(format!("set_bet_sizes oop,{},raise,{}", street, size));
                    lines.push(format!("set_bet_sizes ip,{},raise,{}", street, size));
                }
                lines.push(format!("set_bet_sizes oop,{},allin", street));
                lines.push(format!("set_bet_sizes ip,{},allin", street));
            }
        }
        lines.push(format!("set_allin_threshold {}", config.allin_threshold));
        lines.push(format!("set_thread_num {}", config.threads));
        lines.push(format!("set_accuracy {}", config.accuracy));
        lines.push(format!("set_max_iteration {}", config.iterations));
        lines.push(format!(
            "set_use_isomorphism {}",
            if config.isomorphism { 1 } else { 0 }
        ));
        lines.push(format!("set_dump_rounds {}", config.dump_rounds));
        lines.push("build_tree".to_string());
        lines.push("start_solve".to_string());
        lines.push(format!("dump_result {}", config.dump_file));
        let mut args = vec![config.input_flag.clone(), INPUT_FILE.to_string()];
        if let Some(resources) = config.resources() {
            args.push(config.resource_flag.clone());
            args.push(resources.display().to_string());
        }
        Ok(Self {
            program: config.binary.clone(),
            args,
            script: lines.join("\n"),
            dump: config.dump_file.clone(),
        })
    }

    /// every street still to be played needs bet sizes
    fn sized(spot: &Spot, config: &Config) -> Result<(), Error> {
        let mut street = match spot.street() {
            Street::Pref => Some(Street::Flop),
            postflop => Some(postflop),
        };
        while let Some(s) = street {
            match config.bets.get(&s) {
                Some(sizes) if !sizes.is_empty() => {}
                _ => {
                    return Err(Error::Configuration(format!("no bet sizes for {}", s)));
                }
            }
            street = s.next();
        }
        Ok(())
    }
}
