//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

use crate::calendar::HighlightMode;

/// Base URL of the plan/task REST API.
/// Feel free to override it when initing this library.
pub static API_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("http://127.0.0.1:5000".to_string())));

/// CSS colour used as a background for calendar cells that have a task due.
/// Any CSS colour notation is accepted (`lightblue`, `#add8e6`, `rgb(...)`...).
pub static HIGHLIGHT_COLOR: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("lightblue".to_string())));

/// How due-dates are mapped onto calendar cells
pub static HIGHLIGHT_MODE: Lazy<Arc<Mutex<HighlightMode>>> = Lazy::new(|| Arc::new(Mutex::new(HighlightMode::default())));

/// Environment variable the binary reads to override [`API_URL`]
pub const API_URL_ENV_VAR: &str = "PLAN_BOARD_URL";

pub(crate) const MONTH_NAMES: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Returns the configured API base URL
pub fn api_url() -> String {
    match API_URL.lock() {
        Ok(url) => url.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Returns the configured highlight mode
pub fn highlight_mode() -> HighlightMode {
    match HIGHLIGHT_MODE.lock() {
        Ok(mode) => *mode,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Returns the configured highlight colour as a `#rrggbb` string.
///
/// An invalid colour is logged and replaced by the default one.
pub fn highlight_color() -> String {
    let raw = match HIGHLIGHT_COLOR.lock() {
        Ok(c) => c.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    match csscolorparser::parse(&raw) {
        Ok(color) => color.to_hex_string(),
        Err(err) => {
            log::warn!("Invalid highlight colour {:?} ({}). Using the default one", raw, err);
            "#add8e6".to_string()
        }
    }
}
