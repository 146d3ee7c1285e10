//! Status workflow taxonomy.
//!
//! Statuses form a fixed table of 9 ordered groups; a group can hold several
//! sub-stages (groups 4 and 8 do). Labels normally render as
//! `"<group>. <label>"`, but a fixed set of late-stage labels render bare,
//! as does the default `New`.

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::DocketError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    New,
    DeveloperAssigned,
    WorkInProgress,
    PeerReview,
    SendForQa,
    QaApproved,
    SendForReview,
    Approved,
    Launched,
    Verified,
    Denorm,
    EditsNeeded,
    Escalated,
    GlobalizationCompleted,
    GlobalizationStarted,
    NeedMoreInfo,
    Closed,
    Rejected,
}

/// The workflow table: group number, then that group's labels in order.
pub const GROUPS: &[(u8, &[Status])] = &[
    (1, &[Status::New]),
    (2, &[Status::DeveloperAssigned]),
    (3, &[Status::WorkInProgress]),
    (4, &[Status::PeerReview, Status::SendForQa, Status::QaApproved]),
    (5, &[Status::SendForReview]),
    (6, &[Status::Approved]),
    (7, &[Status::Launched]),
    (
        8,
        &[
            Status::Verified,
            Status::Denorm,
            Status::EditsNeeded,
            Status::Escalated,
            Status::GlobalizationCompleted,
            Status::GlobalizationStarted,
            Status::NeedMoreInfo,
        ],
    ),
    (9, &[Status::Closed, Status::Rejected]),
];

// Labels that render without their group-number prefix.
const NO_PREFIX: &[Status] = &[
    Status::SendForQa,
    Status::QaApproved,
    Status::Denorm,
    Status::EditsNeeded,
    Status::Escalated,
    Status::GlobalizationCompleted,
    Status::GlobalizationStarted,
    Status::NeedMoreInfo,
    Status::Closed,
    Status::Rejected,
];

static BY_NAME: Lazy<HashMap<String, Status>> = Lazy::new(|| {
    GROUPS
        .iter()
        .flat_map(|(_, statuses)| statuses.iter())
        .map(|s| (s.name().to_lowercase(), *s))
        .collect()
});

impl Status {
    /// The exact label string, as stored in snapshots.
    pub fn name(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::DeveloperAssigned => "Developer Assigned",
            Status::WorkInProgress => "Work in Progress",
            Status::PeerReview => "Peer Review",
            Status::SendForQa => "Send for QA",
            Status::QaApproved => "QA Approved",
            Status::SendForReview => "Send for Review",
            Status::Approved => "Approved",
            Status::Launched => "Launched",
            Status::Verified => "Verified",
            Status::Denorm => "Denorm",
            Status::EditsNeeded => "Edits Needed",
            Status::Escalated => "Escalated",
            Status::GlobalizationCompleted => "Globalization Completed",
            Status::GlobalizationStarted => "Globalization Started",
            Status::NeedMoreInfo => "Need More info",
            Status::Closed => "Closed",
            Status::Rejected => "Rejected",
        }
    }

    pub fn group(self) -> u8 {
        GROUPS
            .iter()
            .find(|(_, statuses)| statuses.contains(&self))
            .map(|(group, _)| *group)
            .unwrap_or(1)
    }

    /// Display label: `"<group>. <name>"`, except for the no-prefix set.
    /// The default status always renders as a bare `"New"`.
    pub fn label(self) -> String {
        if self == Status::New || NO_PREFIX.contains(&self) {
            self.name().to_string()
        } else {
            format!("{}. {}", self.group(), self.name())
        }
    }

    /// Parse for snapshot loading: unknown or empty labels fall back to the
    /// default status instead of failing.
    pub fn parse_lenient(s: &str) -> Status {
        BY_NAME
            .get(&s.trim().to_lowercase())
            .copied()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Status {
    type Err = DocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(&s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| DocketError::Api(format!("Unknown status: {}", s)))
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
