//! Checklist items on a case, newest-first like diary entries.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::index::CaseSelector;
use crate::model::ChecklistItem;
use crate::store::CaseStore;
use uuid::Uuid;

pub fn add(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    text: &str,
) -> Result<CmdResult> {
    if text.trim().is_empty() {
        return Err(DocketError::Api("Task text cannot be empty".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    let item_id = store.next_id();
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    case.checklist
        .insert(0, ChecklistItem::new(item_id, text.to_string()));

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Added task to case {}",
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

/// Sets the done bit to an explicit value, as a checkbox does.
pub fn set_done(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    position: usize,
    done: bool,
) -> Result<CmdResult> {
    let id = helpers::resolve_target(store, selector)?;
    let item_id = item_at(store, id, position)?;
    let mut changed = false;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    if let Some(item) = case.checklist.iter_mut().find(|i| i.id == item_id) {
        changed = item.is_done != done;
        item.is_done = done;
    }

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        if !changed {
            let state = if done { "done" } else { "open" };
            result.add_message(CmdMessage::info(format!(
                "Task {} on case {} is already {}",
                position,
                dc.case.tab_label(),
                state
            )));
            return Ok(result);
        }
        let message = if done {
            format!("Checked off task {} on case {}", position, dc.case.tab_label())
        } else {
            format!("Reopened task {} on case {}", position, dc.case.tab_label())
        };
        result.add_message(CmdMessage::success(message));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

pub fn edit(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    position: usize,
    text: &str,
) -> Result<CmdResult> {
    if text.trim().is_empty() {
        return Err(DocketError::Api("Task text cannot be empty".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    let item_id = item_at(store, id, position)?;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    if let Some(item) = case.checklist.iter_mut().find(|i| i.id == item_id) {
        item.text = text.to_string();
    }

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Updated task {} on case {}",
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
    let item_id = item_at(store, id, position)?;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    case.checklist.retain(|i| i.id != item_id);

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Removed task {} from case {}",
            position,
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

fn item_at(store: &CaseStore, id: Uuid, position: usize) -> Result<Uuid> {
    let case = store
        .get(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    position
        .checked_sub(1)
        .and_then(|i| case.checklist.get(i))
        .map(|item| item.id)
        .ok_or_else(|| {
            DocketError::Api(format!(
                "No task {} on case {}",
                position,
                case.tab_label()
            ))
        })
}
