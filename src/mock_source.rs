//! An in-memory [`PlanSource`], that mimics the REST backend in tests
#![cfg(any(test, feature = "local_mock_source"))]

use std::error::Error;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use crate::mock_behaviour::MockBehaviour;
use crate::plan::{NewPlan, Plan, PlanId, COMPLETED_STATUS};
use crate::task::{NewTask, Task, TaskId};
use crate::traits::PlanSource;

/// A [`PlanSource`] that keeps its plans and tasks in memory
#[derive(Clone, Debug, Default)]
pub struct MockSource {
    plans: Vec<Plan>,
    tasks: Vec<Task>,
    next_id: u64,

    /// Tweaks to make some calls fail. Shared, so that tests can update it once the source has been moved
    mock_behaviour: Arc<Mutex<MockBehaviour>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self { next_id: 1, ..Self::default() }
    }

    /// Add a plan without going through [`PlanSource::add_plan`]. Returns its ID
    pub fn insert_plan(&mut self, title: &str, start_date: &str, end_date: &str) -> PlanId {
        let id = self.new_id();
        self.plans.push(Plan::new(id, title.to_string(), start_date.to_string(), end_date.to_string()));
        id
    }

    /// Add a task without going through [`PlanSource::add_task`]. Returns its ID
    pub fn insert_task(&mut self, plan_id: PlanId, name: &str, due_date: &str) -> TaskId {
        let id = self.new_id();
        self.tasks.push(Task::new(id, plan_id, name.to_string(), due_date.to_string()));
        id
    }

    pub fn set_mock_behaviour(&self, behaviour: MockBehaviour) {
        if let Ok(mut b) = self.mock_behaviour.lock() {
            *b = behaviour;
        }
    }

    /// Run a check of the mock behaviour
    fn check<F>(&self, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut MockBehaviour) -> Result<(), Box<dyn Error>>,
    {
        let mut behaviour = self.mock_behaviour.lock()
            .map_err(|_| "Mock behaviour is poisoned")?;
        f(&mut *behaviour)
    }

    pub fn plans(&self) -> &[Plan] { &self.plans }
    pub fn tasks(&self) -> &[Task] { &self.tasks }

    fn new_id(&mut self) -> u64 {
        self.next_id = self.next_id.max(1);
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// The end date of a completed plan, if it ended within the year before `today`
fn ended_within_a_year(plan: &Plan, today: NaiveDate) -> bool {
    match plan.end_date() {
        None => false,
        Some(end) => end >= today - Duration::days(365),
    }
}

#[async_trait]
impl PlanSource for MockSource {
    async fn get_plans(&self) -> Result<Vec<Plan>, Box<dyn Error>> {
        self.check(MockBehaviour::can_get_plans)?;
        Ok(self.plans.clone())
    }

    async fn get_done_plans(&self) -> Result<Vec<Plan>, Box<dyn Error>> {
        self.check(MockBehaviour::can_get_done_plans)?;
        let today = chrono::Local::now().date_naive();
        Ok(self.plans.iter()
            .filter(|p| p.completed() && ended_within_a_year(p, today))
            .cloned()
            .collect())
    }

    async fn get_tasks(&self, plan_id: PlanId) -> Result<Vec<Task>, Box<dyn Error>> {
        self.check(MockBehaviour::can_get_tasks)?;
        Ok(self.tasks.iter()
            .filter(|t| t.plan_id() == Some(plan_id))
            .cloned()
            .collect())
    }

    async fn add_plan(&mut self, plan: NewPlan) -> Result<String, Box<dyn Error>> {
        self.check(MockBehaviour::can_add_plan)?;
        let id = self.new_id();
        self.plans.push(Plan::from_new(id, plan));
        Ok("Plan added successfully!".to_string())
    }

    async fn add_task(&mut self, task: NewTask) -> Result<String, Box<dyn Error>> {
        self.check(MockBehaviour::can_add_task)?;
        let id = self.new_id();
        self.tasks.push(Task::from_new(id, task));
        Ok("Task added successfully!".to_string())
    }

    async fn mark_task_done(&mut self, task_id: TaskId) -> Result<String, Box<dyn Error>> {
        self.check(MockBehaviour::can_mark_done)?;
        match self.tasks.iter_mut().find(|t| t.id() == task_id) {
            None => Err("Task not found".into()),
            Some(task) => {
                task.set_completed(true);
                Ok("Task marked as done!".to_string())
            },
        }
    }

    async fn mark_plan_done(&mut self, plan_id: PlanId) -> Result<String, Box<dyn Error>> {
        self.check(MockBehaviour::can_mark_done)?;
        match self.plans.iter_mut().find(|p| p.id() == plan_id) {
            None => Err("Plan not found".into()),
            Some(plan) => {
                plan.set_status(COMPLETED_STATUS.to_string());
                Ok("Plan marked as done".to_string())
            },
        }
    }

    async fn cleanup_done_plans(&mut self) -> Result<String, Box<dyn Error>> {
        self.check(MockBehaviour::can_cleanup)?;
        let today = chrono::Local::now().date_naive();
        let before = self.plans.len();
        self.plans.retain(|p| p.completed() == false || ended_within_a_year(p, today));
        log::debug!("Removed {} old completed plan(s)", before - self.plans.len());
        Ok("Old completed plans removed.".to_string())
    }
}
