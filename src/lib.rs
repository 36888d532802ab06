// Library root
// -----------
// Fetches the "Einkaufsliste" project from Todoist and renders it as a
// chat-ready text block. The binary (`main.rs`) only wires these together.
//
// Module responsibilities:
// - `api`: blocking HTTP client and the `TodoApi` trait it implements.
// - `secret`: API token retrieval via gopass behind `SecretProvider`.
// - `resolve`: picks the project by name.
// - `format`: groups items by section and renders the text.
// - `app`: runs the steps in order and stops at the first error.
// - `cli`, `ui`: command line flags and the progress spinner.
pub mod api;
pub mod app;
pub mod cli;
pub mod error;
pub mod format;
pub mod resolve;
pub mod secret;
pub mod ui;

pub use error::{Error, Result};
