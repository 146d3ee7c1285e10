use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::CaseSelector;
use crate::store::CaseStore;

pub fn run(store: &CaseStore, selector: Option<&CaseSelector>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let id = match selector {
        Some(selector) => helpers::resolve(store, selector)?,
        None => match store.active_id() {
            Some(id) => id,
            None => {
                result.add_message(CmdMessage::info(
                    "No case selected. Create one with 'docket new' or import a snapshot with 'docket import'.",
                ));
                return Ok(result);
            }
        },
    };

    if let Some(dc) = helpers::display_of(store, id) {
        result.listed_cases.push(dc);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::StoreFixture;

    #[test]
    fn test_view_defaults_to_the_selection() {
        let store = StoreFixture::new().with_case("Checkout", "CS-1").build();
        let result = run(&store, None).unwrap();
        assert_eq!(result.listed_cases[0].case.number, "CS-1");
    }

    #[test]
    fn test_view_with_selector() {
        let store = StoreFixture::new()
            .with_case("Checkout", "CS-1")
            .with_case("Landing", "CS-2")
            .build();
        let result = run(&store, Some(&CaseSelector::Number("CS-2".to_string()))).unwrap();
        assert_eq!(result.listed_cases[0].case.title, "Landing");
    }

    #[test]
    fn test_view_on_empty_store_is_a_hint_not_an_error() {
        let store = StoreFixture::new().build();
        let result = run(&store, None).unwrap();
        assert!(result.listed_cases.is_empty());
        assert!(result.messages[0].content.contains("No case selected"));
    }
}
