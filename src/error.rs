/// Everything that can go wrong between a caller's question and a
/// solver's answer. Variants hold owned strings rather than source
/// errors so the whole enum stays Clone: single-flight waiters all
/// receive the same failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// caller error. a structurally invalid situation or solver config. never retried.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// the binary is missing or not executable. fatal, never retried.
    #[error("failed to launch solver {program}: {reason}")]
    Spawn { program: String, reason: String },

    /// the solver ran and exited nonzero.
    #[error("solver exited with status {status:?}: {stderr}")]
    Process {
        status: Option<i32>,
        stderr: String,
    },

    /// the solver blew through its wall clock and was killed.
    #[error("solver timed out after {limit:?}")]
    Timeout { limit: std::time::Duration },

    /// the solver spoke a schema we don't understand. version mismatch. never retried.
    #[error("unexpected solver output ({reason}): {excerpt}")]
    Parse { reason: String, excerpt: String },

    /// a successfully parsed table is missing what the caller asked for.
    #[error("not found: {0}")]
    NotFound(String),

    /// storage failure. absorbed by the cache, never fails a request.
    #[error("cache storage failure: {0}")]
    Cache(String),
}

impl Error {
    /// failures worth one retry: the solver was killed by the OS or ran
    /// out of memory, nothing deterministic about the spot itself.
    pub fn transient(&self) -> bool {
        match self {
            Error::Process { status, stderr } => {
                matches!(status, Some(137)) || stderr.contains("allocate")
            }
            _ => false,
        }
    }
}
