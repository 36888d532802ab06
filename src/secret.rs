// Credential retrieval. The API token lives in the user's gopass store; the
// `SecretProvider` trait keeps the subprocess out of everything else.

use crate::error::{Error, Result};
use log::debug;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// gopass entry holding the Todoist API token.
pub const SECRET_PATH: &str = "openclaw/todoist-api-token";

/// How long gopass may take before the run gives up.
pub const SECRET_TIMEOUT: Duration = Duration::from_secs(10);

pub trait SecretProvider {
    /// Return the secret as plain text, without surrounding whitespace.
    fn secret(&self) -> Result<String>;
}

/// A fixed secret, e.g. a token already known to the caller.
pub struct StaticSecret(pub String);

impl SecretProvider for StaticSecret {
    fn secret(&self) -> Result<String> {
        Ok(self.0.trim().to_string())
    }
}

/// Reads a secret with `gopass show <path>`.
pub struct GopassProvider {
    program: String,
    path: String,
    timeout: Duration,
}

impl GopassProvider {
    pub fn new(program: &str, path: &str) -> Self {
        GopassProvider {
            program: program.to_string(),
            path: path.to_string(),
            timeout: SECRET_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl SecretProvider for GopassProvider {
    fn secret(&self) -> Result<String> {
        debug!("running {} show {}", self.program, self.path);
        let mut child = Command::new(&self.program)
            .args(["show", &self.path])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Credential(format!("cannot run {}: {}", self.program, e)))?;

        // Drain stdout while waiting, or a long entry fills the pipe and
        // gopass never exits.
        let reader = child.stdout.take().map(|mut stdout| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                stdout.read_to_end(&mut buf).map(|_| buf)
            })
        });

        // std has no wait-with-timeout; poll until the deadline.
        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(Error::Credential(format!(
                        "{} timed out after {:?}",
                        self.program, self.timeout
                    )));
                }
                Ok(None) => thread::sleep(Duration::from_millis(20)),
                Err(e) => return Err(Error::Credential(e.to_string())),
            }
        };

        if !status.success() {
            return Err(Error::Credential(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        let bytes = match reader {
            Some(handle) => handle
                .join()
                .map_err(|_| Error::Credential("output reader panicked".into()))?
                .map_err(|e| Error::Credential(format!("unreadable output: {}", e)))?,
            None => Vec::new(),
        };
        let out = String::from_utf8(bytes)
            .map_err(|e| Error::Credential(format!("unreadable output: {}", e)))?;

        let secret = out.trim();
        if secret.is_empty() {
            return Err(Error::Credential(format!("{} is empty", self.path)));
        }
        Ok(secret.to_string())
    }
}
