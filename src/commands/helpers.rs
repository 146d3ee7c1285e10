use uuid::Uuid;

use crate::error::{DocketError, Result};
use crate::index::{self, CaseSelector, DisplayCase};
use crate::store::CaseStore;

/// The current store state with display indexes assigned.
pub fn indexed_cases(store: &CaseStore) -> Vec<DisplayCase> {
    index::index_cases(store.cases())
}

/// Resolves an explicit selector.
pub fn resolve(store: &CaseStore, selector: &CaseSelector) -> Result<Uuid> {
    index::resolve(store, selector)
}

/// Resolves an optional selector, falling back to the active selection.
pub fn resolve_target(store: &CaseStore, selector: Option<&CaseSelector>) -> Result<Uuid> {
    match selector {
        Some(selector) => index::resolve(store, selector),
        None => store.active_id().ok_or_else(|| {
            DocketError::Api(
                "No case selected. Create one with 'docket new' or select one with 'docket open'."
                    .to_string(),
            )
        }),
    }
}

/// The display entry for one case, after mutations re-shuffle indexes.
pub fn display_of(store: &CaseStore, id: Uuid) -> Option<DisplayCase> {
    indexed_cases(store).into_iter().find(|dc| dc.case.id == id)
}
