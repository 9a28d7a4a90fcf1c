//! This crate provides a way to follow plans and their tasks, as served by a plan-tracking web service.
//!
//! It provides a client for the REST API in the [`client`] module, that can be used as a stand-alone module.
//!
//! The [`calendar`] module builds month grids, and finds which of their days have a task due. \
//! A [`Board`](board::Board) ties everything together: it holds the state of a page (plans, tasks, calendar,
//! open dialogs) and updates it in response to user actions, publishing [`Notice`](feedback::Notice)s rather
//! than failing. The [`render`] module turns this state into HTML markup.

pub mod traits;

pub mod calendar;
pub use calendar::{CalendarCell, CalendarGrid, MonthCursor};
pub mod plan;
pub use plan::Plan;
pub mod task;
pub use task::Task;
mod resource;
pub use resource::Resource;

pub mod client;
pub use client::Client;
pub mod board;
pub use board::Board;
pub mod feedback;
pub mod forms;
pub mod render;

pub mod config;
pub mod utils;

pub mod mock_behaviour;
pub mod mock_source;
