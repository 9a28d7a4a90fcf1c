//! Validation of the "new plan" and "new task" forms

use std::fmt::{Display, Formatter};

use crate::plan::{NewPlan, PlanId};
use crate::task::NewTask;

/// A form field the user has to fill again (and that a front-end should focus)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    PlanTitle,
    PlanStartDate,
    PlanEndDate,
    /// No plan is selected, so a task cannot be attached to anything
    MissingPlan,
    /// The task name or its due date are empty
    TaskNameOrDueDate,
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::PlanTitle => write!(f, "Plan title is required!"),
            FormError::PlanStartDate => write!(f, "Start date is required!"),
            FormError::PlanEndDate => write!(f, "End date is required!"),
            FormError::MissingPlan => write!(f, "Plan ID is missing or invalid!"),
            FormError::TaskNameOrDueDate => write!(f, "Task name and due date are required!"),
        }
    }
}

impl std::error::Error for FormError {}

/// The content of the "new plan" form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanForm {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

impl PlanForm {
    /// Check the required fields, in the order they appear in the form
    pub fn validate(&self) -> Result<NewPlan, FormError> {
        let title = self.title.trim();
        let start_date = self.start_date.trim();
        let end_date = self.end_date.trim();

        if title.is_empty() {
            return Err(FormError::PlanTitle);
        }
        if start_date.is_empty() {
            return Err(FormError::PlanStartDate);
        }
        if end_date.is_empty() {
            return Err(FormError::PlanEndDate);
        }

        Ok(NewPlan {
            title: title.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        })
    }
}

/// The content of the "new task" form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
    pub due_date: String,
}

impl TaskForm {
    /// Build the payload for a task of `plan_id`
    pub fn validate(&self, plan_id: Option<PlanId>) -> Result<NewTask, FormError> {
        let plan_id = plan_id.ok_or(FormError::MissingPlan)?;

        let name = self.name.trim();
        let due_date = self.due_date.trim();
        if name.is_empty() || due_date.is_empty() {
            return Err(FormError::TaskNameOrDueDate);
        }

        Ok(NewTask::new(plan_id, name.to_string(), self.description.trim().to_string(), due_date.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_form(title: &str, start: &str, end: &str) -> PlanForm {
        PlanForm { title: title.to_string(), start_date: start.to_string(), end_date: end.to_string() }
    }

    #[test]
    fn first_missing_plan_field_is_reported() {
        assert_eq!(plan_form("", "", "").validate(), Err(FormError::PlanTitle));
        assert_eq!(plan_form("  ", "2024-01-01", "2024-02-01").validate(), Err(FormError::PlanTitle));
        assert_eq!(plan_form("Trip", "", "").validate(), Err(FormError::PlanStartDate));
        assert_eq!(plan_form("Trip", "2024-01-01", "").validate(), Err(FormError::PlanEndDate));

        let plan = plan_form(" Trip ", "2024-01-01", "2024-02-01").validate().unwrap();
        assert_eq!(plan.title, "Trip");
        assert_eq!(plan.end_date, "2024-02-01");
    }

    #[test]
    fn task_form() {
        let form = TaskForm {
            name: "  Book hotel ".to_string(),
            description: String::new(),
            due_date: "2024-02-15 ".to_string(),
        };
        assert_eq!(form.validate(None), Err(FormError::MissingPlan));

        let task = form.validate(Some(2)).unwrap();
        assert_eq!(task.name, "Book hotel");
        assert_eq!(task.description, "");
        assert_eq!(task.due_date, "2024-02-15");
        assert_eq!(task.plan_id, 2);

        let no_date = TaskForm { due_date: String::new(), ..form };
        assert_eq!(no_date.validate(Some(2)), Err(FormError::TaskNameOrDueDate));
        assert_eq!(no_date.validate(Some(2)).unwrap_err().to_string(), "Task name and due date are required!");
    }
}
