use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::CaseStore;

/// Which slice of the tab strip to show. The default mirrors the strip
/// itself: the active row plus the post-live tail, archived kept aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    Current,
    PostLive,
    Archived,
    All,
}

pub fn run(store: &CaseStore, filter: ListFilter) -> Result<CmdResult> {
    let listed = helpers::indexed_cases(store)
        .into_iter()
        .filter(|dc| match filter {
            ListFilter::Current => !matches!(dc.index, DisplayIndex::Archived(_)),
            ListFilter::PostLive => matches!(dc.index, DisplayIndex::PostLive(_)),
            ListFilter::Archived => matches!(dc.index, DisplayIndex::Archived(_)),
            ListFilter::All => true,
        })
        .collect();
    Ok(CmdResult::default().with_listed_cases(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::StoreFixture;

    fn store() -> CaseStore {
        StoreFixture::new()
            .with_case("Checkout", "CS-1")
            .with_post_live_case("Banner", "CS-2")
            .with_archived_case("Legacy", "CS-3")
            .with_case("Landing", "CS-4")
            .build()
    }

    fn numbers(result: &CmdResult) -> Vec<String> {
        result
            .listed_cases
            .iter()
            .map(|dc| dc.case.number.clone())
            .collect()
    }

    #[test]
    fn test_default_hides_archived() {
        let result = run(&store(), ListFilter::Current).unwrap();
        assert_eq!(numbers(&result), ["CS-1", "CS-4", "CS-2"]);
    }

    #[test]
    fn test_archived_only() {
        let result = run(&store(), ListFilter::Archived).unwrap();
        assert_eq!(numbers(&result), ["CS-3"]);
        assert_eq!(result.listed_cases[0].index, DisplayIndex::Archived(1));
    }

    #[test]
    fn test_post_live_only() {
        let result = run(&store(), ListFilter::PostLive).unwrap();
        assert_eq!(numbers(&result), ["CS-2"]);
    }

    #[test]
    fn test_all_partitions_in_index_order() {
        let result = run(&store(), ListFilter::All).unwrap();
        assert_eq!(numbers(&result), ["CS-1", "CS-4", "CS-2", "CS-3"]);
    }
}
