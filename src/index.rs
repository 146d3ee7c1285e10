//! Display indexing and selectors.
//!
//! The tab strip shows active cases as `1..n` in their user-controlled
//! order; post-live cases as `p1..pn` and archived cases as `a1..an`, both
//! in store order. Indexes are assigned fresh on every listing, so they are
//! stable only until the next mutation.

use std::fmt;
use std::str::FromStr;

use crate::error::DocketError;
use crate::model::{Case, Partition};
use crate::store::CaseStore;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Active(usize),
    PostLive(usize),
    Archived(usize),
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayIndex::Active(n) => write!(f, "{}", n),
            DisplayIndex::PostLive(n) => write!(f, "p{}", n),
            DisplayIndex::Archived(n) => write!(f, "a{}", n),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = DocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || DocketError::Api(format!("Invalid index: {}", s));
        if let Some(rest) = s.strip_prefix('p') {
            rest.parse().map(DisplayIndex::PostLive).map_err(|_| bad())
        } else if let Some(rest) = s.strip_prefix('a') {
            rest.parse().map(DisplayIndex::Archived).map_err(|_| bad())
        } else {
            s.parse().map(DisplayIndex::Active).map_err(|_| bad())
        }
    }
}

/// How a command names a case: a display index, or a case number
/// (`num:` forces the latter when the number looks like an index).
#[derive(Debug, Clone, PartialEq)]
pub enum CaseSelector {
    Index(DisplayIndex),
    Number(String),
}

impl fmt::Display for CaseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseSelector::Index(idx) => write!(f, "{}", idx),
            CaseSelector::Number(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for CaseSelector {
    type Err = DocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DocketError::Api("Empty selector".to_string()));
        }
        if let Some(number) = s.strip_prefix("num:") {
            return Ok(CaseSelector::Number(number.trim().to_string()));
        }
        match DisplayIndex::from_str(s) {
            Ok(idx) => Ok(CaseSelector::Index(idx)),
            Err(_) => Ok(CaseSelector::Number(s.to_string())),
        }
    }
}

/// A case paired with its display index for rendering.
#[derive(Debug, Clone)]
pub struct DisplayCase {
    pub case: Case,
    pub index: DisplayIndex,
}

/// Assigns per-partition indexes in store order: the active row first, then
/// post-live, then archived.
pub fn index_cases(cases: &[Case]) -> Vec<DisplayCase> {
    let mut out = Vec::with_capacity(cases.len());
    for (partition, make) in [
        (
            Partition::Active,
            DisplayIndex::Active as fn(usize) -> DisplayIndex,
        ),
        (Partition::PostLive, DisplayIndex::PostLive),
        (Partition::Archived, DisplayIndex::Archived),
    ] {
        let mut n = 1;
        for case in cases.iter().filter(|c| c.partition() == partition) {
            out.push(DisplayCase {
                case: case.clone(),
                index: make(n),
            });
            n += 1;
        }
    }
    out
}

/// Resolves a selector against the current store state.
pub fn resolve(store: &CaseStore, selector: &CaseSelector) -> crate::error::Result<Uuid> {
    match selector {
        CaseSelector::Index(idx) => index_cases(store.cases())
            .iter()
            .find(|dc| dc.index == *idx)
            .map(|dc| dc.case.id)
            .ok_or_else(|| DocketError::CaseNotFound(selector.to_string())),
        CaseSelector::Number(number) => store
            .find_by_number(number)
            .map(|c| c.id)
            .ok_or_else(|| DocketError::CaseNotFound(selector.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeqGen;

    #[test]
    fn test_display_index_round_trip() {
        for (s, idx) in [
            ("3", DisplayIndex::Active(3)),
            ("p1", DisplayIndex::PostLive(1)),
            ("a12", DisplayIndex::Archived(12)),
        ] {
            assert_eq!(DisplayIndex::from_str(s).unwrap(), idx);
            assert_eq!(idx.to_string(), s);
        }
    }

    #[test]
    fn test_display_index_rejects_garbage() {
        assert!(DisplayIndex::from_str("x3").is_err());
        assert!(DisplayIndex::from_str("p").is_err());
        assert!(DisplayIndex::from_str("").is_err());
    }

    #[test]
    fn test_selector_falls_back_to_number() {
        assert_eq!(
            CaseSelector::from_str("2").unwrap(),
            CaseSelector::Index(DisplayIndex::Active(2))
        );
        assert_eq!(
            CaseSelector::from_str("CS-12").unwrap(),
            CaseSelector::Number("CS-12".to_string())
        );
        assert_eq!(
            CaseSelector::from_str("num:12").unwrap(),
            CaseSelector::Number("12".to_string())
        );
        assert!(CaseSelector::from_str("  ").is_err());
    }

    fn sample_store() -> CaseStore {
        let mut s = CaseStore::with_ids(Box::new(SeqGen::new()));
        for (number, archived, post_live) in [
            ("CS-3", false, false),
            ("CS-2", true, false),
            ("CS-1", false, true),
            ("CS-0", false, false),
        ] {
            s.create();
            let case = s.active_mut().unwrap();
            case.number = number.to_string();
            case.is_archived = archived;
            case.is_post_live = post_live;
        }
        // Store order is CS-0, CS-1, CS-2, CS-3 after the prepends
        s
    }

    #[test]
    fn test_index_cases_assigns_per_partition() {
        let s = sample_store();
        let indexed = index_cases(s.cases());
        let view: Vec<(String, String)> = indexed
            .iter()
            .map(|dc| (dc.index.to_string(), dc.case.number.clone()))
            .collect();
        assert_eq!(
            view,
            [
                ("1".to_string(), "CS-0".to_string()),
                ("2".to_string(), "CS-3".to_string()),
                ("p1".to_string(), "CS-1".to_string()),
                ("a1".to_string(), "CS-2".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_by_index_and_number() {
        let s = sample_store();
        let by_index = resolve(&s, &CaseSelector::Index(DisplayIndex::Archived(1))).unwrap();
        assert_eq!(s.get(by_index).unwrap().number, "CS-2");

        let by_number = resolve(&s, &CaseSelector::Number("cs-1".to_string())).unwrap();
        assert_eq!(s.get(by_number).unwrap().number, "CS-1");
    }

    #[test]
    fn test_resolve_misses_report_the_selector() {
        let s = sample_store();
        let err = resolve(&s, &CaseSelector::Index(DisplayIndex::Active(9))).unwrap_err();
        assert!(err.to_string().contains("9"));
        let err = resolve(&s, &CaseSelector::Number("CS-99".to_string())).unwrap_err();
        assert!(err.to_string().contains("CS-99"));
    }
}
