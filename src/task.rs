//! To-do tasks, as served by the `/api/tasks` endpoints

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-side identifier of a task
pub type TaskId = u64;

/// A unit of work belonging to a [`Plan`](crate::plan::Plan)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    /// The plan this task belongs to
    #[serde(default)]
    plan_id: Option<crate::plan::PlanId>,

    /// The display name of the task
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    /// The due date, as typed in the form (usually `YYYY-MM-DD`)
    #[serde(default, deserialize_with = "null_as_empty")]
    due_date: String,
    /// The time this task was submitted, if the server kept it
    #[serde(default)]
    date_added: Option<String>,

    /// The backend stores this as an integer, so both `0`/`1` and booleans are accepted
    #[serde(default, deserialize_with = "bool_or_int")]
    completed: bool,
}

impl Task {
    /// Create an uncompleted task, e.g. to mock a server
    pub fn new(id: TaskId, plan_id: crate::plan::PlanId, name: String, due_date: String) -> Self {
        Self {
            id,
            plan_id: Some(plan_id),
            name,
            description: String::new(),
            due_date,
            date_added: None,
            completed: false,
        }
    }

    /// Create a task out of a submitted [`NewTask`], once the server has given it an ID
    pub fn from_new(id: TaskId, new_task: NewTask) -> Self {
        Self {
            id,
            plan_id: Some(new_task.plan_id),
            name: new_task.name,
            description: new_task.description,
            due_date: new_task.due_date,
            date_added: Some(new_task.date_added),
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId                          { self.id          }
    pub fn plan_id(&self) -> Option<crate::plan::PlanId> { self.plan_id     }
    pub fn name(&self) -> &str                          { &self.name       }
    pub fn description(&self) -> &str                   { &self.description }
    pub fn due_date_str(&self) -> &str                  { &self.due_date   }
    pub fn date_added(&self) -> Option<&str>            { self.date_added.as_deref() }
    pub fn completed(&self) -> bool                     { self.completed   }

    /// The parsed due date, or `None` if the server sent something that is not a date
    pub fn due_date(&self) -> Option<NaiveDate> {
        crate::utils::parse_date(&self.due_date)
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// The payload sent to create a task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    /// RFC 3339 timestamp of the submission
    pub date_added: String,
    pub due_date: String,
    pub plan_id: crate::plan::PlanId,
}

impl NewTask {
    /// Build a payload, stamped with the current time
    pub fn new(plan_id: crate::plan::PlanId, name: String, description: String, due_date: String) -> Self {
        Self {
            name,
            description,
            date_added: Utc::now().to_rfc3339(),
            due_date,
            plan_id,
        }
    }
}

fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Null(()),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(i) => Ok(i != 0),
        Flag::Null(()) => Ok(false),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
