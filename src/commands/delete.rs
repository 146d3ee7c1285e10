//! Permanent deletion. Only archived cases qualify; the precondition is
//! checked before the confirmation hook so a refused case never prompts.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::index::CaseSelector;
use crate::model::{Case, Partition};
use crate::store::CaseStore;

pub fn run(
    store: &mut CaseStore,
    selector: &CaseSelector,
    confirm: &mut dyn FnMut(&Case) -> bool,
) -> Result<CmdResult> {
    let id = helpers::resolve(store, selector)?;
    let case = store
        .get(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;

    if case.partition() != Partition::Archived {
        return Err(DocketError::NotArchived(case.tab_label().to_string()));
    }

    let mut result = CmdResult::default();
    if !confirm(case) {
        result.add_message(CmdMessage::info("Delete cancelled"));
        return Ok(result);
    }

    let removed = store.remove(id)?;
    result.add_message(CmdMessage::success(format!(
        "Deleted case {}",
        removed.tab_label()
    )));
    result.affected_cases.push(removed);
    Ok(result)
}
