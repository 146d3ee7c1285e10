//! Reordering the active row. Dragging only ever rearranges active cases;
//! post-live and archived cases keep their place in the underlying store.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::CaseSelector;
use crate::model::Partition;
use crate::store::{CaseStore, DropSlot};

pub fn run(
    store: &mut CaseStore,
    dragged: &CaseSelector,
    target: &CaseSelector,
    slot: DropSlot,
) -> Result<CmdResult> {
    let dragged_id = helpers::resolve(store, dragged)?;
    let target_id = helpers::resolve(store, target)?;
    let moved = store.reorder(dragged_id, target_id, slot)?;

    let mut result = CmdResult::default();
    if moved {
        let dragged_label = store
            .get(dragged_id)
            .map(|c| c.tab_label())
            .unwrap_or_default();
        let target_label = store
            .get(target_id)
            .map(|c| c.tab_label())
            .unwrap_or_default();
        let slot_word = match slot {
            DropSlot::Before => "before",
            DropSlot::After => "after",
        };
        result.add_message(CmdMessage::success(format!(
            "Moved case {} {} case {}",
            dragged_label, slot_word, target_label
        )));
    } else {
        result.add_message(CmdMessage::info("Order unchanged"));
    }
    result.listed_cases = helpers::indexed_cases(store)
        .into_iter()
        .filter(|dc| dc.case.partition() == Partition::Active)
        .collect();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocketError;
    use crate::fixtures::StoreFixture;

    fn active_numbers(result: &CmdResult) -> Vec<String> {
        result
            .listed_cases
            .iter()
            .map(|dc| dc.case.number.clone())
            .collect()
    }

    #[test]
    fn test_move_before_renumbers_the_row() {
        let mut store = StoreFixture::new()
            .with_case("One", "CS-1")
            .with_case("Two", "CS-2")
            .with_case("Three", "CS-3")
            .build();
        let dragged = CaseSelector::Number("CS-3".to_string());
        let target = CaseSelector::Number("CS-1".to_string());
        let result = run(&mut store, &dragged, &target, DropSlot::Before).unwrap();
        assert_eq!(active_numbers(&result), vec!["CS-3", "CS-1", "CS-2"]);
        assert!(result.messages[0]
            .content
            .contains("Moved case CS-3 before case CS-1"));
    }

    #[test]
    fn test_move_after() {
        let mut store = StoreFixture::new()
            .with_case("One", "CS-1")
            .with_case("Two", "CS-2")
            .with_case("Three", "CS-3")
            .build();
        let dragged = CaseSelector::Number("CS-1".to_string());
        let target = CaseSelector::Number("CS-2".to_string());
        let result = run(&mut store, &dragged, &target, DropSlot::After).unwrap();
        assert_eq!(active_numbers(&result), vec!["CS-2", "CS-1", "CS-3"]);
    }

    #[test]
    fn test_dropping_in_place_reports_no_change() {
        let mut store = StoreFixture::new()
            .with_case("One", "CS-1")
            .with_case("Two", "CS-2")
            .build();
        let dragged = CaseSelector::Number("CS-1".to_string());
        let target = CaseSelector::Number("CS-2".to_string());
        let result = run(&mut store, &dragged, &target, DropSlot::Before).unwrap();
        assert!(result.messages[0].content.contains("Order unchanged"));
        assert_eq!(active_numbers(&result), vec!["CS-1", "CS-2"]);
    }

    #[test]
    fn test_non_active_cases_cannot_be_reordered() {
        let mut store = StoreFixture::new()
            .with_case("One", "CS-1")
            .with_archived_case("Two", "CS-2")
            .build();
        let dragged = CaseSelector::Number("CS-2".to_string());
        let target = CaseSelector::Number("CS-1".to_string());
        let err = run(&mut store, &dragged, &target, DropSlot::Before).unwrap_err();
        assert!(matches!(err, DocketError::Api(_)));
    }
}
