// file: src/executor.rs
// version: 1.0.0
// guid: 2f6a9d4e-7b1c-4e83-a5f9-0d3b8c2e6a4f

use crate::config::Config;
use crate::error::{Result, WrapperError};
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

/// Resolves the delegate build tool, runs it, and relays its outcome
pub struct Executor {
    config: Config,
}

impl Executor {
    /// Create a new executor with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Locate the delegate executable.
    ///
    /// A configured program containing a path separator is checked directly;
    /// a bare name is searched on PATH. Tilde expansion happens first so
    /// `~/pros/bin/pros` from a config file or environment override works.
    pub fn resolve(&self) -> Result<PathBuf> {
        let program = shellexpand::tilde(&self.config.delegate.program);
        which::which(program.as_ref())
            .map_err(|_| WrapperError::tool_not_found(&self.config.delegate.program))
    }

    /// Run the delegate with `args` exactly as received and return its exit
    /// code.
    ///
    /// All three standard streams are inherited, so the delegate's output
    /// reaches the caller without buffering or transformation.
    pub async fn run<T: AsRef<OsStr>>(&self, args: &[T]) -> Result<i32> {
        let program = self.resolve()?;
        debug!(
            "Delegating to {} with {} argument(s)",
            program.display(),
            args.len()
        );

        let mut cmd = Command::new(&program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(ref wd) = self.config.delegate.working_directory {
            cmd.current_dir(wd);
        }

        let mut child = cmd.spawn().map_err(|source| WrapperError::Launch {
            program: program.display().to_string(),
            source,
        })?;

        let status = self.supervise(&mut child).await?;
        debug!("Delegate exited with status {}", status);
        Ok(exit_code(status))
    }

    /// Wait for the child, relaying termination signals and enforcing the
    /// configured deadline.
    #[cfg(unix)]
    async fn supervise(&self, child: &mut Child) -> Result<ExitStatus> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())?;
        let mut terminate = signal(SignalKind::terminate())?;

        let deadline = async {
            match self.config.delegate.timeout_seconds {
                Some(secs) => tokio::time::sleep(std::time::Duration::from_secs(secs)).await,
                None => std::future::pending().await,
            }
        };
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                status = child.wait() => return Ok(status?),
                _ = interrupt.recv() => forward_signal(child, libc::SIGINT),
                _ = terminate.recv() => forward_signal(child, libc::SIGTERM),
                _ = &mut deadline => {
                    warn!("Delegate exceeded the configured deadline, killing it");
                    child.kill().await?;
                    return Err(WrapperError::Timeout {
                        program: self.config.delegate.program.clone(),
                        seconds: self.config.delegate.timeout_seconds.unwrap_or(0),
                    });
                }
            }
        }
    }

    #[cfg(not(unix))]
    async fn supervise(&self, child: &mut Child) -> Result<ExitStatus> {
        match self.config.delegate.timeout_seconds {
            Some(secs) => {
                let deadline = std::time::Duration::from_secs(secs);
                match tokio::time::timeout(deadline, child.wait()).await {
                    Ok(status) => Ok(status?),
                    Err(_) => {
                        warn!("Delegate exceeded the configured deadline, killing it");
                        child.kill().await?;
                        Err(WrapperError::Timeout {
                            program: self.config.delegate.program.clone(),
                            seconds: secs,
                        })
                    }
                }
            }
            None => Ok(child.wait().await?),
        }
    }
}

/// Forward a termination signal to the child and keep waiting for it
#[cfg(unix)]
fn forward_signal(child: &Child, signal: libc::c_int) {
    if let Some(pid) = child.id() {
        debug!("Forwarding signal {} to pid {}", signal, pid);
        unsafe {
            libc::kill(pid as libc::pid_t, signal);
        }
    }
}

/// Map the delegate's exit status onto the code this process reports.
///
/// On Unix a signal-terminated child has no exit code; 128 + signal matches
/// what a shell would report for it.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
