// Orchestration: token -> client -> project -> sections -> tasks -> text.
// The first failing step aborts the run; nothing is formatted in that case.

use crate::api::{Task, TodoApi};
use crate::error::{Error, Result};
use crate::format::format_shopping_list;
use crate::resolve::find_project;
use crate::secret::SecretProvider;
use indicatif::ProgressBar;
use log::{debug, info};
use std::collections::HashMap;

/// Fetch the project called `project_name` and render its open items.
///
/// `connect` turns the token into an API implementation, which lets tests
/// swap the HTTP client for canned data. `progress` only receives status
/// messages; pass `ProgressBar::hidden()` to stay silent.
pub fn fetch_shopping_list<S, A, F>(
    secrets: &S,
    connect: F,
    project_name: &str,
    progress: &ProgressBar,
) -> Result<String>
where
    S: SecretProvider + ?Sized,
    A: TodoApi,
    F: FnOnce(&str) -> Result<A>,
{
    progress.set_message("Reading API token...");
    let token = secrets.secret()?;
    let api = connect(&token)?;

    progress.set_message("Looking up project...");
    let projects = api.list_projects()?;
    debug!("account has {} projects", projects.len());
    let project = find_project(&projects, project_name)
        .ok_or_else(|| Error::ProjectNotFound(project_name.to_string()))?;
    info!("using project {} ({})", project.name, project.id);

    progress.set_message("Fetching sections...");
    let sections: HashMap<String, String> = api
        .list_sections(&project.id)?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    progress.set_message("Fetching items...");
    let tasks: Vec<Task> = api
        .list_tasks(&project.id)?
        .into_iter()
        .filter(|t| !t.checked)
        .collect();
    info!("{} open items in {} sections", tasks.len(), sections.len());

    Ok(format_shopping_list(&tasks, &sections))
}
