use std::error::Error;

use url::Url;

/// Just a wrapper around the base URL of the API
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    url: Url,
}

impl Resource {
    /// Parse a base URL such as `http://127.0.0.1:5000`
    pub fn parse<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(format!("{} cannot be used as a base URL", url).into());
        }
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url { &self.url }

    /// Build the URL of an endpoint by keeping the same scheme and server from the base, but replacing its path.
    ///
    /// A path prefix of the base URL (e.g. `http://host/tracker/`) is kept.
    pub fn combine(&self, endpoint: &str) -> Url {
        let mut built = self.url.clone();
        let prefix = self.url.path().trim_end_matches('/');
        built.set_path(&format!("{}/{}", prefix, endpoint.trim_start_matches('/')));
        built.set_query(None);
        built
    }

    pub fn plans(&self) -> Url                    { self.combine("api/plans") }
    pub fn done_plans(&self) -> Url               { self.combine("api/done-plans") }
    pub fn plan_done(&self, plan_id: u64) -> Url  { self.combine(&format!("api/plans/{}/done", plan_id)) }
    pub fn cleanup(&self) -> Url                  { self.combine("api/cleanup") }
    pub fn tasks(&self) -> Url                    { self.combine("api/tasks") }
    pub fn plan_tasks(&self, plan_id: u64) -> Url { self.combine(&format!("api/tasks/{}", plan_id)) }
    pub fn task_done(&self, task_id: u64) -> Url  { self.combine(&format!("api/tasks/{}/done", task_id)) }
}
