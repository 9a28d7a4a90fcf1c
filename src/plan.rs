//! Plans, as served by the `/api/plans` endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-side identifier of a plan
pub type PlanId = u64;

/// The status the server gives to plans that have been marked as done
pub const COMPLETED_STATUS: &str = "Completed";

/// A top-level objective, that contains zero or more [`Task`](crate::task::Task)s
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    id: PlanId,
    title: String,
    /// Free-form status. Plans that have never been updated may have none
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
}

impl Plan {
    pub fn new(id: PlanId, title: String, start_date: String, end_date: String) -> Self {
        Self {
            id,
            title,
            status: None,
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    /// Create a plan out of a submitted [`NewPlan`], once the server has given it an ID
    pub fn from_new(id: PlanId, new_plan: NewPlan) -> Self {
        Self::new(id, new_plan.title, new_plan.start_date, new_plan.end_date)
    }

    pub fn id(&self) -> PlanId                 { self.id }
    pub fn title(&self) -> &str                { &self.title }
    pub fn status(&self) -> Option<&str>       { self.status.as_deref() }
    pub fn start_date_str(&self) -> Option<&str> { self.start_date.as_deref() }
    pub fn end_date_str(&self) -> Option<&str>   { self.end_date.as_deref() }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(crate::utils::parse_date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(crate::utils::parse_date)
    }

    pub fn completed(&self) -> bool {
        self.status() == Some(COMPLETED_STATUS)
    }

    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
    }
}

/// The payload sent to create a plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPlan {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_plan() {
        let json = r#"[
            {"id": 1, "title": "Move out", "status": "Completed", "start_date": "2024-01-02 10:00:00", "end_date": "2024-02-01"},
            {"id": 2, "title": "Learn Rust", "status": null, "start_date": null, "end_date": "2024-12-31"}
        ]"#;
        let plans: Vec<Plan> = serde_json::from_str(json).unwrap();

        assert_eq!(plans[0].completed(), true);
        assert_eq!(plans[0].start_date(), NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(plans[1].completed(), false);
        assert_eq!(plans[1].status(), None);
        assert_eq!(plans[1].start_date(), None);
        assert_eq!(plans[1].end_date(), NaiveDate::from_ymd_opt(2024, 12, 31));
    }
}
