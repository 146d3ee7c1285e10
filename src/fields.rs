//! Typed case-field edits.
//!
//! Every scalar field a caller can set is one [`FieldEdit`] variant, so an
//! edit is validated (booleans, dates, status membership) when it is built,
//! not when it is applied.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::error::{DocketError, Result};
use crate::model::Case;
use crate::workflow::Status;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Title(String),
    Number(String),
    LaunchDate(Option<NaiveDate>),
    Status(Status),
    Favorite(bool),
    Archived(bool),
    PostLive(bool),
    SpecialProject(bool),
    CanLaunchSooner(bool),
    Reopened(bool),
    ContentAutomated(bool),
}

/// Field keys accepted by [`FieldEdit::parse`], in help order.
pub const FIELD_KEYS: &[&str] = &[
    "title",
    "number",
    "launch-date",
    "status",
    "favorite",
    "archived",
    "post-live",
    "special-project",
    "can-launch-sooner",
    "reopened",
    "content-automated",
];

impl FieldEdit {
    /// Builds an edit from a user-typed key and value.
    pub fn parse(field: &str, value: &str) -> Result<FieldEdit> {
        match field.trim().to_lowercase().as_str() {
            "title" => Ok(FieldEdit::Title(value.to_string())),
            "number" => Ok(FieldEdit::Number(value.to_string())),
            "launch-date" => Ok(FieldEdit::LaunchDate(parse_date(value)?)),
            "status" => Ok(FieldEdit::Status(Status::from_str(value)?)),
            "favorite" => Ok(FieldEdit::Favorite(parse_bool(field, value)?)),
            "archived" => Ok(FieldEdit::Archived(parse_bool(field, value)?)),
            "post-live" => Ok(FieldEdit::PostLive(parse_bool(field, value)?)),
            "special-project" => Ok(FieldEdit::SpecialProject(parse_bool(field, value)?)),
            "can-launch-sooner" => Ok(FieldEdit::CanLaunchSooner(parse_bool(field, value)?)),
            "reopened" => Ok(FieldEdit::Reopened(parse_bool(field, value)?)),
            "content-automated" => Ok(FieldEdit::ContentAutomated(parse_bool(field, value)?)),
            other => Err(DocketError::Api(format!(
                "Unknown field: {}. Known fields: {}",
                other,
                FIELD_KEYS.join(", ")
            ))),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FieldEdit::Title(_) => "title",
            FieldEdit::Number(_) => "number",
            FieldEdit::LaunchDate(_) => "launch-date",
            FieldEdit::Status(_) => "status",
            FieldEdit::Favorite(_) => "favorite",
            FieldEdit::Archived(_) => "archived",
            FieldEdit::PostLive(_) => "post-live",
            FieldEdit::SpecialProject(_) => "special-project",
            FieldEdit::CanLaunchSooner(_) => "can-launch-sooner",
            FieldEdit::Reopened(_) => "reopened",
            FieldEdit::ContentAutomated(_) => "content-automated",
        }
    }

    /// Writes the value into the case. Partition flags are set verbatim here;
    /// selection bookkeeping for them lives in the store's transitions.
    pub fn apply_to(&self, case: &mut Case) {
        match self {
            FieldEdit::Title(v) => case.title = v.clone(),
            FieldEdit::Number(v) => case.number = v.clone(),
            FieldEdit::LaunchDate(v) => case.launch_date = *v,
            FieldEdit::Status(v) => case.status = *v,
            FieldEdit::Favorite(v) => case.is_favorite = *v,
            FieldEdit::Archived(v) => case.is_archived = *v,
            FieldEdit::PostLive(v) => case.is_post_live = *v,
            FieldEdit::SpecialProject(v) => case.is_special_project = *v,
            FieldEdit::CanLaunchSooner(v) => case.can_launch_sooner = *v,
            FieldEdit::Reopened(v) => case.is_reopened = *v,
            FieldEdit::ContentAutomated(v) => case.is_content_automated = *v,
        }
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(DocketError::Api(format!(
            "Invalid value for {}: {} (expected true/false)",
            field, other
        ))),
    }
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            DocketError::Api(format!(
                "Invalid launch date: {} (expected YYYY-MM-DD)",
                value
            ))
        })
}
