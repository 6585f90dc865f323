use super::invocation::Invocation;
use super::invocation::INPUT_FILE;
use crate::error::Error;
use crate::excerpt;
use crate::RETRY_BACKOFF;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;

/// what a finished solver process left behind
#[derive(Debug, Clone)]
pub struct RawOutput {
    /// contents of the dump file, the part we actually parse
    pub dump: String,
    pub stdout: String,
    pub stderr: String,
}

/// supervised execution of a solver invocation under a hard wall clock.
/// abstracted so the bridge can be exercised without a real binary.
#[async_trait]
pub trait Runner: Send + Sync {
    async fn run(&self, invocation: &Invocation, limit: Duration) -> Result<RawOutput, Error>;
}

/// the live realization: tempdir workspace, piped stdio, kill on drop.
/// retries once after a backoff when the failure smells like resource
/// exhaustion rather than anything about the spot itself. timeouts are
/// never retried, the caller's wall clock bound wins.
pub struct BinaryRunner;

#[async_trait]
impl Runner for BinaryRunner {
    async fn run(&self, invocation: &Invocation, limit: Duration) -> Result<RawOutput, Error> {
        match self.attempt(invocation, limit).await {
            Err(e) if e.transient() => {
                log::warn!("{:<32}{}", "retrying transient failure", e);
                tokio::time::sleep(RETRY_BACKOFF).await;
                self.attempt(invocation, limit).await
            }
            done => done,
        }
    }
}

impl BinaryRunner {
    async fn attempt(&self, invocation: &Invocation, limit: Duration) -> Result<RawOutput, Error> {
        let program = invocation.program.display().to_string();
        let spawn = |reason: String| Error::Spawn {
            program: program.clone(),
            reason,
        };
        let dir = tempfile::tempdir().map_err(|e| spawn(e.to_string()))?;
        tokio::fs::write(dir.path().join(INPUT_FILE), &invocation.script)
            .await
            .map_err(|e| spawn(e.to_string()))?;
        log::debug!("{:<32}{}", "launching solver", program);
        let child = tokio::process::Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| spawn(e.to_string()))?;
        // dropping the wait future on timeout kills the child
        let output = match tokio::time::timeout(limit, child.wait_with_output()).await {
            Err(_) => return Err(Error::Timeout { limit }),
            Ok(waited) => waited.map_err(|e| spawn(e.to_string()))?,
        };
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if !output.status.success() {
            return Err(Error::Process {
                status: output.status.code(),
                stderr: excerpt(&stderr),
            });
        }
        let dump = tokio::fs::read_to_string(dir.path().join(&invocation.dump))
            .await
            .map_err(|_| Error::Parse {
                reason: format!("solver produced no dump file {}", invocation.dump),
                excerpt: excerpt(&stdout),
            })?;
        Ok(RawOutput {
            dump,
            stdout,
            stderr,
        })
    }
}
