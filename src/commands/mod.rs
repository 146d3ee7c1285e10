use crate::index::DisplayCase;
use crate::model::Case;

pub mod checklist;
pub mod create;
pub mod delete;
pub mod diary;
pub mod export;
pub mod helpers;
pub mod import;
pub mod lifecycle;
pub mod list;
pub mod reference;
pub mod reorder;
pub mod report;
pub mod search;
pub mod select;
pub mod tags;
pub mod tasks;
pub mod update;
pub mod view;

pub use tasks::PendingTask;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back for rendering: the cases it touched, any listed
/// view, and leveled messages. Commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cases: Vec<Case>,
    pub listed_cases: Vec<DisplayCase>,
    pub tasks: Vec<PendingTask>,
    pub report: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cases(mut self, cases: Vec<DisplayCase>) -> Self {
        self.listed_cases = cases;
        self
    }
}
