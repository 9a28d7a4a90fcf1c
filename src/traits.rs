use std::error::Error;

use async_trait::async_trait;

use crate::plan::{NewPlan, Plan, PlanId};
use crate::task::{NewTask, Task, TaskId};

/// A source of plans and tasks, e.g. the REST backend
///
/// Mutations return the confirmation message sent by the source.
#[async_trait]
pub trait PlanSource {
    /// Returns every plan
    async fn get_plans(&self) -> Result<Vec<Plan>, Box<dyn Error>>;
    /// Returns the plans that have been completed during the last year
    async fn get_done_plans(&self) -> Result<Vec<Plan>, Box<dyn Error>>;
    /// Returns the tasks of a plan
    async fn get_tasks(&self, plan_id: PlanId) -> Result<Vec<Task>, Box<dyn Error>>;

    /// Create a new plan
    async fn add_plan(&mut self, plan: NewPlan) -> Result<String, Box<dyn Error>>;
    /// Create a new task
    async fn add_task(&mut self, task: NewTask) -> Result<String, Box<dyn Error>>;

    async fn mark_task_done(&mut self, task_id: TaskId) -> Result<String, Box<dyn Error>>;
    async fn mark_plan_done(&mut self, plan_id: PlanId) -> Result<String, Box<dyn Error>>;

    /// Remove the plans that have been completed for more than a year
    async fn cleanup_done_plans(&mut self) -> Result<String, Box<dyn Error>>;
}
