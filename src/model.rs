use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::workflow::Status;

/// Lifecycle bucket a case occupies. Derived from the flags, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Active,
    PostLive,
    Archived,
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Partition::Active => write!(f, "Active"),
            Partition::PostLive => write!(f, "Post-live"),
            Partition::Archived => write!(f, "Archived"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaryEntry {
    pub id: Uuid,
    // Opaque formatted text; stored and returned as-is.
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl DiaryEntry {
    pub fn new(id: Uuid, text: String) -> Self {
        Self {
            id,
            text,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: Uuid,
    pub text: String,
    pub is_done: bool,
}

impl ChecklistItem {
    pub fn new(id: Uuid, text: String) -> Self {
        Self {
            id,
            text,
            is_done: false,
        }
    }
}

/// A named external link attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub profile: String,
    pub collection: String,
    pub product_id: String,
}

impl Reference {
    pub fn new(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            url: String::new(),
            profile: String::new(),
            collection: String::new(),
            product_id: String::new(),
        }
    }
}

/// The unit of tracked work. Children are kept newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: Uuid,
    pub title: String,
    pub number: String,
    pub launch_date: Option<NaiveDate>,
    pub is_special_project: bool,
    pub can_launch_sooner: bool,
    pub is_archived: bool,
    pub is_reopened: bool,
    pub is_post_live: bool,
    pub is_content_automated: bool,
    pub is_favorite: bool,
    pub status: Status,
    pub tags: Vec<String>,
    pub diary: Vec<DiaryEntry>,
    pub checklist: Vec<ChecklistItem>,
    pub references: Vec<Reference>,
}

pub const DEFAULT_TITLE: &str = "New Case";

impl Case {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            number: String::new(),
            launch_date: None,
            is_special_project: false,
            can_launch_sooner: false,
            is_archived: false,
            is_reopened: false,
            is_post_live: false,
            is_content_automated: false,
            is_favorite: false,
            status: Status::default(),
            tags: Vec::new(),
            diary: Vec::new(),
            checklist: Vec::new(),
            references: Vec::new(),
        }
    }

    /// `is_archived` takes precedence over `is_post_live`.
    pub fn partition(&self) -> Partition {
        if self.is_archived {
            Partition::Archived
        } else if self.is_post_live {
            Partition::PostLive
        } else {
            Partition::Active
        }
    }

    /// What the tab strip shows: the case number, falling back to the title.
    pub fn tab_label(&self) -> &str {
        if self.number.is_empty() {
            &self.title
        } else {
            &self.number
        }
    }

    /// Adds a tag unless the case already carries it.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes a tag; removing an absent tag is a no-op.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}
