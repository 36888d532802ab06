// Project lookup by name.

use crate::api::Project;

/// Name of the project that holds the shopping list.
pub const PROJECT_NAME: &str = "Einkaufsliste";

/// Return the first project whose name equals `name` exactly (case matters).
/// `None` simply means the account has no such project.
pub fn find_project<'a>(projects: &'a [Project], name: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.name == name)
}
