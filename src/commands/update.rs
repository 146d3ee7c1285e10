use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::fields::FieldEdit;
use crate::index::CaseSelector;
use crate::store::CaseStore;

pub fn run(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    edits: &[FieldEdit],
) -> Result<CmdResult> {
    if edits.is_empty() {
        return Err(DocketError::Api("No fields to set".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    for edit in edits {
        store.apply(id, edit);
    }

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        let keys: Vec<&str> = edits.iter().map(|e| e.key()).collect();
        result.add_message(CmdMessage::success(format!(
            "Updated case {}: {}",
            dc.case.tab_label(),
            keys.join(", ")
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}
