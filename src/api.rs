// API client module: a small blocking HTTP client for the Todoist REST API.
// Only the three read-only listings the shopping list needs are exposed,
// behind the `TodoApi` trait so the rest of the crate can run on canned data.

use crate::error::Result;
use log::debug;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Default base URL of the Todoist REST API.
pub const API_BASE: &str = "https://api.todoist.com/api/v1";

/// Per-request wait limit used when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub name: String,
}

/// A single to-do item. `section_id` is `null` or missing for items that
/// live directly in the project; `checked` may be missing or `null`, and
/// both mean the item is still open.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub checked: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Every listing endpoint wraps its records in `{"results": [...]}`.
#[derive(Deserialize, Debug)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// The read operations the shopping list needs from the to-do service.
pub trait TodoApi {
    fn list_projects(&self) -> Result<Vec<Project>>;
    fn list_sections(&self, project_id: &str) -> Result<Vec<Section>>;
    fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>>;
}

/// Blocking client holding the reqwest client, the base URL and the bearer
/// token sent with every call.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Build a client against `base_url`. The timeout applies to each call
    /// separately.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// GET `<base>/<endpoint>` and unwrap the `results` array.
    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);
        let mut req = self.client.get(&url).bearer_auth(&self.token);
        if !query.is_empty() {
            req = req.query(query);
        }
        let res = req.send()?;
        debug!("{} -> {}", url, res.status());
        let page: Page<T> = res.error_for_status()?.json()?;
        Ok(page.results)
    }
}

impl TodoApi for ApiClient {
    fn list_projects(&self) -> Result<Vec<Project>> {
        self.get("projects", &[])
    }

    fn list_sections(&self, project_id: &str) -> Result<Vec<Section>> {
        self.get("sections", &[("project_id", project_id)])
    }

    fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>> {
        self.get("tasks", &[("project_id", project_id)])
    }
}
