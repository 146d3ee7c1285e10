//! Builds the reference report for a case and optionally writes it to disk.

use std::fs;
use std::path::Path;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::index::CaseSelector;
use crate::report::{build_report, RefColumn};
use crate::store::CaseStore;

pub fn run(
    store: &CaseStore,
    selector: Option<&CaseSelector>,
    columns: &[RefColumn],
    output: Option<&Path>,
) -> Result<CmdResult> {
    if columns.is_empty() {
        return Err(DocketError::Api("No report columns selected".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    let case = store
        .get(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    let text = build_report(&case.references, columns);
    if text.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No references on case {}",
            case.tab_label()
        )));
        return Ok(result);
    }

    if let Some(path) = output {
        fs::write(path, format!("{}\n", text))?;
        result.add_message(CmdMessage::success(format!(
            "Wrote report for case {} to {}",
            case.tab_label(),
            path.display()
        )));
    } else {
        result.report = Some(text);
    }
    Ok(result)
}
