//! The state of a plan board page
//!
//! A [`Board`] holds everything a front-end displays (the plan list, the tasks of the selected plan, the calendar page
//! and its highlighted cells, which dialog is open) and updates it in response to user actions. \
//! Each action fetches fresh data from its [`PlanSource`] and replaces what was shown before: the latest reply wins.
//!
//! Errors never escape a board. They are logged and published as [`Notice`](crate::feedback::Notice)s, and the
//! previous state is kept.

use std::collections::BTreeSet;

use crate::calendar::{build_grid, highlight_due_dates, CalendarGrid, HighlightMode, MonthCursor};
use crate::feedback::{FeedbackSender, Notice, Notifier};
use crate::forms::{FormError, PlanForm, TaskForm};
use crate::plan::{Plan, PlanId};
use crate::task::{Task, TaskId};
use crate::traits::PlanSource;

/// Which dialog is shown on top of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    None,
    NewPlan,
    NewTask,
}

/// The state of a plan board, backed by a [`PlanSource`]
pub struct Board<S>
where
    S: PlanSource,
{
    source: S,
    notifier: Notifier,

    cursor: MonthCursor,
    grid: CalendarGrid,
    highlight_mode: HighlightMode,
    marks: BTreeSet<usize>,

    plans: Vec<Plan>,
    selected_plan: Option<PlanId>,
    tasks: Vec<Task>,

    modal: Modal,
}

impl<S> Board<S>
where
    S: PlanSource,
{
    /// Create a board showing `cursor`'s month. Nothing is fetched yet, see [`Self::load_plans`]
    pub fn new(source: S, cursor: MonthCursor) -> Self {
        Self::new_with_notifier(source, cursor, Notifier::new())
    }

    /// Create a board that publishes its notices on `feedback_sender`
    pub fn new_with_feedback(source: S, cursor: MonthCursor, feedback_sender: FeedbackSender) -> Self {
        Self::new_with_notifier(source, cursor, Notifier::new_with_feedback_channel(feedback_sender))
    }

    fn new_with_notifier(source: S, cursor: MonthCursor, notifier: Notifier) -> Self {
        Self {
            source,
            notifier,
            cursor,
            grid: build_grid(cursor),
            highlight_mode: crate::config::highlight_mode(),
            marks: BTreeSet::new(),
            plans: Vec::new(),
            selected_plan: None,
            tasks: Vec::new(),
            modal: Modal::None,
        }
    }

    pub fn source(&self) -> &S                  { &self.source }
    pub fn source_mut(&mut self) -> &mut S      { &mut self.source }
    pub fn cursor(&self) -> &MonthCursor        { &self.cursor }
    pub fn grid(&self) -> &CalendarGrid         { &self.grid }
    /// Indices of the grid cells that have a task due
    pub fn marks(&self) -> &BTreeSet<usize>     { &self.marks }
    pub fn plans(&self) -> &[Plan]              { &self.plans }
    pub fn selected_plan(&self) -> Option<PlanId> { self.selected_plan }
    pub fn tasks(&self) -> &[Task]              { &self.tasks }
    pub fn modal(&self) -> Modal                { self.modal }
    pub fn highlight_mode(&self) -> HighlightMode { self.highlight_mode }
    /// The latest notice published by this board
    pub fn last_notice(&self) -> &Notice        { self.notifier.last() }

    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed() == false)
    }

    pub fn done_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed())
    }

    pub fn set_highlight_mode(&mut self, mode: HighlightMode) {
        self.highlight_mode = mode;
        self.refresh_marks();
    }

    //
    // Calendar
    //

    /// Show the next month
    pub fn next_month(&mut self) {
        self.cursor.advance();
        self.refresh_calendar();
    }

    /// Show the previous month
    pub fn prev_month(&mut self) {
        self.cursor.retreat();
        self.refresh_calendar();
    }

    fn refresh_calendar(&mut self) {
        log::debug!("Showing {}", self.cursor);
        self.grid = build_grid(self.cursor);
        self.refresh_marks();
    }

    fn refresh_marks(&mut self) {
        self.marks = highlight_due_dates(&self.grid, &self.tasks, self.highlight_mode);
    }

    //
    // Dialogs
    //

    pub fn open_plan_modal(&mut self)  { self.modal = Modal::NewPlan; }
    pub fn open_task_modal(&mut self)  { self.modal = Modal::NewTask; }

    pub fn close_plan_modal(&mut self) {
        if self.modal == Modal::NewPlan {
            self.modal = Modal::None;
        }
    }

    pub fn close_task_modal(&mut self) {
        if self.modal == Modal::NewTask {
            self.modal = Modal::None;
        }
    }

    //
    // Plans and tasks
    //

    /// Fetch the plan list. Returns whether it succeeded
    pub async fn load_plans(&mut self) -> bool {
        match self.source.get_plans().await {
            Ok(plans) => {
                self.plans = plans;
                true
            },
            Err(err) => {
                self.notifier.error(&format!("Error fetching plans: {}", err));
                false
            },
        }
    }

    /// Select a plan and fetch its tasks. Returns whether the tasks could be fetched
    pub async fn select_plan(&mut self, plan_id: PlanId) -> bool {
        log::info!("Displaying tasks for plan {}", plan_id);
        if self.selected_plan != Some(plan_id) {
            self.tasks.clear();
            self.refresh_marks();
        }
        self.selected_plan = Some(plan_id);
        self.reload_tasks().await
    }

    /// Fetch again the tasks of the selected plan. Returns whether it succeeded
    pub async fn reload_tasks(&mut self) -> bool {
        let plan_id = match self.selected_plan {
            None => {
                log::warn!("No plan is selected, there are no tasks to fetch");
                return false;
            },
            Some(id) => id,
        };

        match self.source.get_tasks(plan_id).await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.refresh_marks();
                true
            },
            Err(err) => {
                self.notifier.error(&format!("Error fetching tasks: {}", err));
                false
            },
        }
    }

    /// Validate and submit the "new plan" form.
    ///
    /// On success, the dialog is closed and the plan list is fetched again.
    /// A form that is not valid is not submitted, and the field to fill is returned.
    pub async fn submit_plan(&mut self, form: &PlanForm) -> Result<(), FormError> {
        let new_plan = match form.validate() {
            Ok(p) => p,
            Err(err) => {
                self.notifier.error(&err.to_string());
                return Err(err);
            },
        };

        let result = self.source.add_plan(new_plan).await.map_err(|err| err.to_string());
        match result {
            Ok(_) => {
                self.notifier.info("Plan added successfully!");
                self.modal = Modal::None;
                self.load_plans().await;
            },
            Err(err) => {
                self.notifier.error(&format!("Failed to add plan: {}", err));
            },
        }
        Ok(())
    }

    /// Validate and submit the "new task" form, for the selected plan.
    ///
    /// On success, the tasks of the plan are fetched again.
    pub async fn submit_task(&mut self, form: &TaskForm) -> Result<(), FormError> {
        let new_task = match form.validate(self.selected_plan) {
            Ok(t) => t,
            Err(err) => {
                self.notifier.error(&err.to_string());
                return Err(err);
            },
        };
        log::debug!("Submitting task {:?}", new_task);

        let result = self.source.add_task(new_task).await.map_err(|err| err.to_string());
        match result {
            Ok(_) => {
                self.notifier.info("Task added successfully!");
                self.reload_tasks().await;
            },
            Err(err) => {
                self.notifier.error(&format!("Failed to add task: {}", err));
            },
        }
        Ok(())
    }

    /// Mark a task as done, then fetch the tasks again. Returns whether it succeeded
    pub async fn mark_task_done(&mut self, task_id: TaskId) -> bool {
        let result = self.source.mark_task_done(task_id).await.map_err(|err| err.to_string());
        match result {
            Ok(_) => {
                self.notifier.info("Task marked as done!");
                self.reload_tasks().await;
                true
            },
            Err(err) => {
                self.notifier.error(&format!("Failed to mark task as done: {}", err));
                false
            },
        }
    }

    /// Mark a plan as done, then fetch the plans again. Returns whether it succeeded
    pub async fn mark_plan_done(&mut self, plan_id: PlanId) -> bool {
        let result = self.source.mark_plan_done(plan_id).await.map_err(|err| err.to_string());
        match result {
            Ok(_) => {
                self.notifier.info("Plan marked as done!");
                self.load_plans().await;
                true
            },
            Err(err) => {
                self.notifier.error(&format!("Failed to mark plan as done: {}", err));
                false
            },
        }
    }

    /// Fetch the plans completed during the last year
    pub async fn done_plans(&mut self) -> Option<Vec<Plan>> {
        match self.source.get_done_plans().await {
            Ok(plans) => Some(plans),
            Err(err) => {
                self.notifier.error(&format!("Error fetching completed plans: {}", err));
                None
            },
        }
    }

    /// Ask the source to forget about plans completed more than a year ago, then fetch the plans again
    pub async fn cleanup_done_plans(&mut self) -> bool {
        let result = self.source.cleanup_done_plans().await.map_err(|err| err.to_string());
        match result {
            Ok(message) => {
                let text = if message.is_empty() { "Old completed plans removed.".to_string() } else { message };
                self.notifier.info(&text);
                self.load_plans().await;
                true
            },
            Err(err) => {
                self.notifier.error(&format!("Failed to clean up completed plans: {}", err));
                false
            },
        }
    }
}
