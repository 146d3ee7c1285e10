//! Diary entries on a case. Entries are kept newest-first, so position 1 is
//! always the latest note. Entry text is stored verbatim.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::index::CaseSelector;
use crate::model::DiaryEntry;
use crate::store::CaseStore;
use uuid::Uuid;

pub fn add(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    text: &str,
) -> Result<CmdResult> {
    if text.trim().is_empty() {
        return Err(DocketError::Api("Diary text cannot be empty".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    let entry_id = store.next_id();
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    case.diary.insert(0, DiaryEntry::new(entry_id, text.to_string()));

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Added diary entry to case {}",
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

/// Rewrites the text of an entry, keeping its original timestamp.
pub fn edit(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    position: usize,
    text: &str,
) -> Result<CmdResult> {
    if text.trim().is_empty() {
        return Err(DocketError::Api("Diary text cannot be empty".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    let entry_id = entry_at(store, id, position)?;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    if let Some(entry) = case.diary.iter_mut().find(|e| e.id == entry_id) {
        entry.text = text.to_string();
    }

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Updated diary entry {} on case {}",
            position,
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

pub fn remove(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    position: usize,
) -> Result<CmdResult> {
    let id = helpers::resolve_target(store, selector)?;
    let entry_id = entry_at(store, id, position)?;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    case.diary.retain(|e| e.id != entry_id);

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Removed diary entry {} from case {}",
            position,
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

fn entry_at(store: &CaseStore, id: Uuid, position: usize) -> Result<Uuid> {
    let case = store
        .get(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    position
        .checked_sub(1)
        .and_then(|i| case.diary.get(i))
        .map(|entry| entry.id)
        .ok_or_else(|| {
            DocketError::Api(format!(
                "No diary entry {} on case {}",
                position,
                case.tab_label()
            ))
        })
}
