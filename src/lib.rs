pub mod cache;
pub mod canon;
pub mod cards;
pub mod error;
pub mod solver;
pub mod spot;

/// Stack sizes, pot sizes, and bet amounts in big blinds.
pub type Chips = f32;
/// Strategy weights and mixing frequencies.
pub type Probability = f32;
/// Expected values and payoffs, in big blinds.
pub type Utility = f32;
/// Exploitability, i.e. distance from equilibrium.
pub type Energy = f32;

/// Tolerance for a strategy's frequencies summing to one.
pub const FREQUENCY_TOLERANCE: Probability = 1e-6;
/// Backoff before the single retry of a transient solver failure.
pub const RETRY_BACKOFF: std::time::Duration = std::time::Duration::from_millis(500);
/// Cap on raw-output excerpts carried by parse failures.
pub const EXCERPT_LIMIT: usize = 256;

/// Random instance generation for testing.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Bounded snippet of untrusted solver output, for error context.
pub(crate) fn excerpt(raw: &str) -> String {
    raw.chars().take(EXCERPT_LIMIT).collect()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
