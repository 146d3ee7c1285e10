//! Partition transitions and the favorite bit.
//!
//! Archiving is destructive enough to sit behind the confirmation hook; the
//! other transitions apply directly. Selection reassignment happens inside
//! the store's transition methods.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::index::CaseSelector;
use crate::model::{Case, Partition};
use crate::store::CaseStore;

pub fn archive(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    confirm: &mut dyn FnMut(&Case) -> bool,
) -> Result<CmdResult> {
    let id = helpers::resolve_target(store, selector)?;
    let case = store
        .get(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    if case.partition() == Partition::Archived {
        result.add_message(CmdMessage::info(format!(
            "Case {} is already archived",
            case.tab_label()
        )));
        return Ok(result);
    }
    if !confirm(case) {
        result.add_message(CmdMessage::info("Archive cancelled"));
        return Ok(result);
    }

    store.set_archived(id, true);
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Archived case {}",
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

/// Restores an archived case to the active row and opens it.
pub fn unarchive(store: &mut CaseStore, selector: &CaseSelector) -> Result<CmdResult> {
    let id = helpers::resolve(store, selector)?;
    let case = store
        .get(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    if case.partition() != Partition::Archived {
        result.add_message(CmdMessage::info(format!(
            "Case {} is not archived",
            case.tab_label()
        )));
        return Ok(result);
    }

    store.set_archived(id, false);
    store.select(id);
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Restored case {} to the active row",
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

pub fn set_post_live(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    value: bool,
) -> Result<CmdResult> {
    let id = helpers::resolve_target(store, selector)?;
    let case = store
        .get(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    match (case.partition(), value) {
        (Partition::Archived, _) => {
            result.add_message(CmdMessage::warning(format!(
                "Case {} is archived; unarchive it first",
                case.tab_label()
            )));
            return Ok(result);
        }
        (Partition::PostLive, true) | (Partition::Active, false) => {
            result.add_message(CmdMessage::info(format!(
                "Case {} is already {}",
                case.tab_label(),
                case.partition()
            )));
            return Ok(result);
        }
        _ => {}
    }

    store.set_post_live(id, value);
    if let Some(dc) = helpers::display_of(store, id) {
        let message = if value {
            format!("Marked case {} post-live", dc.case.tab_label())
        } else {
            format!("Returned case {} to the active row", dc.case.tab_label())
        };
        result.add_message(CmdMessage::success(message));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

pub fn toggle_favorite(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
) -> Result<CmdResult> {
    let id = helpers::resolve_target(store, selector)?;
    let now_favorite = store
        .toggle_favorite(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        let message = if now_favorite {
            format!("Marked case {} as a favorite", dc.case.tab_label())
        } else {
            format!("Removed favorite from case {}", dc.case.tab_label())
        };
        result.add_message(CmdMessage::success(message));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}
