use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CaseStore;

pub fn run(store: &mut CaseStore, title: Option<String>, number: Option<String>) -> Result<CmdResult> {
    let id = store.create().id;
    if let Some(case) = store.get_mut(id) {
        if let Some(title) = title {
            case.title = title;
        }
        if let Some(number) = number {
            case.number = number;
        }
    }

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Created case {}: {}",
            dc.index,
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::StoreFixture;
    use crate::model::DEFAULT_TITLE;

    #[test]
    fn test_create_with_defaults() {
        let mut store = StoreFixture::new().build();
        let result = run(&mut store, None, None).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(result.affected_cases[0].title, DEFAULT_TITLE);
        assert_eq!(store.active_id(), Some(result.affected_cases[0].id));
    }

    #[test]
    fn test_create_goes_to_the_head_of_the_row() {
        let mut store = StoreFixture::new().with_case("First", "CS-1").build();
        run(&mut store, Some("Second".to_string()), Some("CS-2".to_string())).unwrap();
        assert_eq!(store.cases()[0].number, "CS-2");
        assert_eq!(store.cases()[1].number, "CS-1");
    }

    #[test]
    fn test_create_reports_the_new_index() {
        let mut store = StoreFixture::new().with_case("First", "CS-1").build();
        let result = run(&mut store, None, Some("CS-2".to_string())).unwrap();
        assert!(result.messages[0].content.contains("Created case 1: CS-2"));
    }
}
