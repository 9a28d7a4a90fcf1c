//! This module provides a client to connect to the plan/task REST API

use std::error::Error;

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::plan::{NewPlan, Plan, PlanId};
use crate::resource::Resource;
use crate::task::{NewTask, Task, TaskId};
use crate::traits::PlanSource;

/// The JSON body the server replies with, for mutations and errors
#[derive(Clone, Debug, Default, Deserialize)]
struct ServerReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// A [`PlanSource`] that fetches its data from the REST backend
#[derive(Clone, Debug)]
pub struct Client {
    resource: Resource,
    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let resource = Resource::parse(url)?;
        Ok(Self {
            resource,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client for the URL set in [`config::API_URL`](crate::config::API_URL)
    pub fn from_config() -> Result<Self, Box<dyn Error>> {
        Self::new(crate::config::api_url())
    }

    pub fn url(&self) -> &Url {
        self.resource.url()
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Box<dyn Error>> {
        log::debug!("GET {}", url);
        let response = self.http.get(url.clone()).send().await?;
        let response = check_status(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|err| format!("Invalid reply from {}: {}", url, err).into())
    }

    async fn send<B: Serialize + ?Sized>(&self, method: Method, url: Url, body: Option<&B>) -> Result<String, Box<dyn Error>> {
        log::debug!("{} {}", method, url);
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_string(body)?);
        }
        let response = request.send().await?;
        let response = check_status(response).await?;

        let text = response.text().await?;
        let reply: ServerReply = serde_json::from_str(&text).unwrap_or_default();
        Ok(reply.message.unwrap_or_default())
    }
}

/// Turn non-2xx responses into errors carrying the server's explanation
async fn check_status(response: Response) -> Result<Response, Box<dyn Error>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_message(status, &body).into())
}

/// Build an error message out of an unsuccessful reply
fn error_message(status: StatusCode, body: &str) -> String {
    let reply: ServerReply = serde_json::from_str(body).unwrap_or_default();
    match (reply.error, reply.message) {
        (Some(error), _) => error,
        (None, Some(message)) => message,
        (None, None) => format!("Unexpected HTTP status code {:?}", status),
    }
}

#[async_trait]
impl PlanSource for Client {
    async fn get_plans(&self) -> Result<Vec<Plan>, Box<dyn Error>> {
        let plans: Vec<Plan> = self.get_json(self.resource.plans()).await?;
        log::info!("Fetched {} plan(s)", plans.len());
        Ok(plans)
    }

    async fn get_done_plans(&self) -> Result<Vec<Plan>, Box<dyn Error>> {
        self.get_json(self.resource.done_plans()).await
    }

    async fn get_tasks(&self, plan_id: PlanId) -> Result<Vec<Task>, Box<dyn Error>> {
        let tasks: Vec<Task> = self.get_json(self.resource.plan_tasks(plan_id)).await?;
        log::info!("Fetched {} task(s) for plan {}", tasks.len(), plan_id);
        Ok(tasks)
    }

    async fn add_plan(&mut self, plan: NewPlan) -> Result<String, Box<dyn Error>> {
        self.send(Method::POST, self.resource.plans(), Some(&plan)).await
    }

    async fn add_task(&mut self, task: NewTask) -> Result<String, Box<dyn Error>> {
        self.send(Method::POST, self.resource.tasks(), Some(&task)).await
    }

    async fn mark_task_done(&mut self, task_id: TaskId) -> Result<String, Box<dyn Error>> {
        self.send::<()>(Method::PUT, self.resource.task_done(task_id), None).await
    }

    async fn mark_plan_done(&mut self, plan_id: PlanId) -> Result<String, Box<dyn Error>> {
        self.send::<()>(Method::PUT, self.resource.plan_done(plan_id), None).await
    }

    async fn cleanup_done_plans(&mut self) -> Result<String, Box<dyn Error>> {
        self.send::<()>(Method::POST, self.resource.cleanup(), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(error_message(StatusCode::NOT_FOUND, r#"{"error": "Task not found"}"#), "Task not found");
        assert_eq!(error_message(StatusCode::NOT_FOUND, r#"{"message": "Plan not found"}"#), "Plan not found");
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"error": "Invalid input", "message": "ignored"}"#),
            "Invalid input");
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            "Unexpected HTTP status code 500");
    }

    #[test]
    fn client_url() {
        let client = Client::new("http://localhost:5000/").unwrap();
        assert_eq!(client.url().as_str(), "http://localhost:5000/");
        assert!(Client::new("localhost").is_err());
    }
}
