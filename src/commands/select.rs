use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::CaseSelector;
use crate::store::CaseStore;

/// Sets the active selection. Works across partitions, so a case surfaced by
/// the pending-task view can be opened even while archived or post-live.
pub fn run(store: &mut CaseStore, selector: &CaseSelector) -> Result<CmdResult> {
    let id = helpers::resolve(store, selector)?;
    store.select(id);

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Opened case {} ({})",
            dc.case.tab_label(),
            dc.case.partition()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocketError;
    use crate::fixtures::StoreFixture;
    use crate::index::DisplayIndex;

    fn store() -> CaseStore {
        StoreFixture::new()
            .with_case("Checkout", "CS-1")
            .with_archived_case("Legacy", "CS-2")
            .build()
    }

    #[test]
    fn test_open_by_number() {
        let mut store = store();
        run(&mut store, &CaseSelector::Number("cs-2".to_string())).unwrap();
        assert_eq!(store.active().unwrap().number, "CS-2");
    }

    #[test]
    fn test_open_an_archived_case_by_index() {
        let mut store = store();
        let selector = CaseSelector::Index(DisplayIndex::Archived(1));
        let result = run(&mut store, &selector).unwrap();
        assert_eq!(store.active().unwrap().number, "CS-2");
        assert!(result.messages[0].content.contains("Archived"));
    }

    #[test]
    fn test_open_unknown_selector_fails() {
        let mut store = store();
        let err = run(&mut store, &CaseSelector::Number("CS-9".to_string())).unwrap_err();
        assert!(matches!(err, DocketError::CaseNotFound(_)));
    }
}
