//! Snapshot codec: the pure `parse`/`serialize` pair for the case file.
//!
//! The on-disk format is an indented JSON array of case records. Loading is
//! additive-compatible: records are read through raw helper structs whose
//! fields are all optional, then canonicalized. Missing ids are filled from
//! the injected generator, missing collections become empty, missing flags
//! false, missing or unknown statuses the default. The legacy spellings
//! `csFiles` and `nome` are still accepted on input; output always uses the
//! current schema.
//!
//! A payload whose top level is not an array of records fails as a whole and
//! the caller keeps its current store untouched.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{DocketError, Result};
use crate::model::{Case, ChecklistItem, DiaryEntry, Reference};
use crate::store::IdGen;
use crate::workflow::Status;

pub fn parse(bytes: &[u8], ids: &mut dyn IdGen) -> Result<Vec<Case>> {
    let raw: Vec<RawCase> =
        serde_json::from_slice(bytes).map_err(|e| DocketError::Snapshot(e.to_string()))?;
    Ok(raw.into_iter().map(|r| r.into_case(ids)).collect())
}

pub fn serialize(cases: &[Case]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(cases)?)
}

/// Suggested name for a timestamped export.
pub fn export_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("docket-{}.json", now.format("%Y-%m-%d_%H-%M"))
}

fn fill_id(id: Option<String>, ids: &mut dyn IdGen) -> Uuid {
    // Ids from older files are not UUIDs; those are regenerated like
    // missing ones.
    id.and_then(|s| Uuid::parse_str(s.trim()).ok())
        .unwrap_or_else(|| ids.next())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCase {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    number: String,
    #[serde(default)]
    launch_date: Option<String>,
    #[serde(default)]
    is_special_project: bool,
    #[serde(default)]
    can_launch_sooner: bool,
    #[serde(default)]
    is_archived: bool,
    #[serde(default)]
    is_reopened: bool,
    #[serde(default)]
    is_post_live: bool,
    #[serde(default)]
    is_content_automated: bool,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    diary: Vec<RawDiaryEntry>,
    #[serde(default)]
    checklist: Vec<RawChecklistItem>,
    #[serde(default, alias = "csFiles")]
    references: Vec<RawReference>,
}

impl RawCase {
    fn into_case(self, ids: &mut dyn IdGen) -> Case {
        Case {
            id: fill_id(self.id, ids),
            title: self.title,
            number: self.number,
            launch_date: self
                .launch_date
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()),
            is_special_project: self.is_special_project,
            can_launch_sooner: self.can_launch_sooner,
            is_archived: self.is_archived,
            is_reopened: self.is_reopened,
            is_post_live: self.is_post_live,
            is_content_automated: self.is_content_automated,
            is_favorite: self.is_favorite,
            status: self
                .status
                .map(|s| Status::parse_lenient(&s))
                .unwrap_or_default(),
            tags: self.tags,
            diary: self.diary.into_iter().map(|d| d.into_entry(ids)).collect(),
            checklist: self
                .checklist
                .into_iter()
                .map(|t| t.into_item(ids))
                .collect(),
            references: self
                .references
                .into_iter()
                .map(|r| r.into_reference(ids))
                .collect(),
        }
    }
}

#[derive(Deserialize)]
struct RawDiaryEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

impl RawDiaryEntry {
    fn into_entry(self, ids: &mut dyn IdGen) -> DiaryEntry {
        DiaryEntry {
            id: fill_id(self.id, ids),
            text: self.text,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChecklistItem {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    is_done: bool,
}

impl RawChecklistItem {
    fn into_item(self, ids: &mut dyn IdGen) -> ChecklistItem {
        ChecklistItem {
            id: fill_id(self.id, ids),
            text: self.text,
            is_done: self.is_done,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReference {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, alias = "nome")]
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    profile: String,
    #[serde(default)]
    collection: String,
    #[serde(default)]
    product_id: String,
}

impl RawReference {
    fn into_reference(self, ids: &mut dyn IdGen) -> Reference {
        Reference {
            id: fill_id(self.id, ids),
            name: self.name,
            url: self.url,
            profile: self.profile,
            collection: self.collection,
            product_id: self.product_id,
        }
    }
}
