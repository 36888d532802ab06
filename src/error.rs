// Error types shared by the library modules. Every failure that can abort
// a run maps to exactly one variant so the binary can report it clearly.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The secret store could not hand out the API token (missing tool,
    /// non-zero exit, timeout or empty output).
    #[error("Failed to retrieve API token from gopass: {0}")]
    Credential(String),

    /// No project with the requested name exists in the account.
    #[error("Project '{0}' not found.")]
    ProjectNotFound(String),

    /// Any HTTP failure: connection, timeout, bad status or undecodable body.
    #[error("Todoist API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
