//! Non-blocking notifications for the user
//!
//! Instead of popping a blocking alert, a [`Board`](crate::board::Board) publishes [`Notice`]s on a watch channel.
//! A front-end can display the latest one whenever it likes (e.g. as a toast), or simply ignore them: every notice is
//! also logged.

use std::fmt::{Display, Error, Formatter};

/// A message for the user
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Nothing happened yet
    Nothing,
    /// An action succeeded
    Info(String),
    /// An action failed. The page is still usable
    Error(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Notice::Nothing => write!(f, ""),
            Notice::Info(text) => write!(f, "{}", text),
            Notice::Error(text) => write!(f, "Error: {}", text),
        }
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self::Nothing
    }
}


/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<Notice>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<Notice>;

/// Create a feedback channel, that can be used to retrieve the latest notice of a board
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(Notice::default())
}


/// Logs notices and forwards them to the listener (if any), keeping count of the errors
pub struct Notifier {
    n_errors: u32,
    last: Notice,
    feedback_channel: Option<FeedbackSender>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { n_errors: 0, last: Notice::Nothing, feedback_channel: None }
    }
    pub fn new_with_feedback_channel(channel: FeedbackSender) -> Self {
        Self { n_errors: 0, last: Notice::Nothing, feedback_channel: Some(channel) }
    }

    /// How many errors have been notified so far
    pub fn n_errors(&self) -> u32 {
        self.n_errors
    }

    /// The latest notice
    pub fn last(&self) -> &Notice {
        &self.last
    }

    /// Tell the user an action succeeded
    pub fn info(&mut self, text: &str) {
        log::info!("{}", text);
        self.publish(Notice::Info(text.to_string()));
    }

    /// Tell the user an action failed
    pub fn error(&mut self, text: &str) {
        log::error!("{}", text);
        self.n_errors += 1;
        self.publish(Notice::Error(text.to_string()));
    }

    fn publish(&mut self, notice: Notice) {
        self.last = notice.clone();
        if let Some(sender) = &self.feedback_channel {
            // No receiver left is not an error: the notice has been logged anyway
            let _ = sender.send(notice);
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
