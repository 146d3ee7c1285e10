//! Tagging. Both directions are idempotent; repeating an operation reports
//! an info message instead of failing.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::index::CaseSelector;
use crate::store::CaseStore;

pub fn add(store: &mut CaseStore, selector: Option<&CaseSelector>, tag: &str) -> Result<CmdResult> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(DocketError::Api("Tag cannot be empty".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    let added = case.add_tag(tag);

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        if added {
            result.add_message(CmdMessage::success(format!(
                "Added tag [{}] to case {}",
                tag,
                dc.case.tab_label()
            )));
            result.affected_cases.push(dc.case);
        } else {
            result.add_message(CmdMessage::info(format!(
                "Case {} already has tag [{}]",
                dc.case.tab_label(),
                tag
            )));
        }
    }
    Ok(result)
}

pub fn remove(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    tag: &str,
) -> Result<CmdResult> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(DocketError::Api("Tag cannot be empty".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    let removed = case.remove_tag(tag);

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        if removed {
            result.add_message(CmdMessage::success(format!(
                "Removed tag [{}] from case {}",
                tag,
                dc.case.tab_label()
            )));
            result.affected_cases.push(dc.case);
        } else {
            result.add_message(CmdMessage::info(format!(
                "Case {} has no tag [{}]",
                dc.case.tab_label(),
                tag
            )));
        }
    }
    Ok(result)
}
