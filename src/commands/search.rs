//! Case-insensitive substring search across titles, numbers, diary text,
//! checklist text and tags. Results come back in store order with their
//! current display indexes attached.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayCase;
use crate::model::Case;
use crate::store::CaseStore;
use std::collections::HashMap;

/// A piece of text split around query hits, for emphasis in the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSegment {
    Plain(String),
    Match(String),
}

pub fn run(store: &CaseStore, query: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let raw = query.trim();
    let query = raw.to_lowercase();
    if query.is_empty() {
        return Ok(result);
    }

    let indexes: HashMap<_, _> = helpers::indexed_cases(store)
        .into_iter()
        .map(|dc| (dc.case.id, dc.index))
        .collect();
    for case in store.cases().iter().filter(|c| matches_case(c, &query)) {
        if let Some(index) = indexes.get(&case.id) {
            result.listed_cases.push(DisplayCase {
                case: case.clone(),
                index: *index,
            });
        }
    }

    if result.listed_cases.is_empty() {
        result.add_message(CmdMessage::info(format!("No cases match '{}'", raw)));
    }
    Ok(result)
}

fn matches_case(case: &Case, query: &str) -> bool {
    contains(&case.title, query)
        || contains(&case.number, query)
        || case.diary.iter().any(|e| contains(&e.text, query))
        || case.checklist.iter().any(|i| contains(&i.text, query))
        || case.tags.iter().any(|t| contains(t, query))
}

fn contains(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

/// Splits `text` into plain and matched segments for a query, scanning
/// case-insensitively but returning the original spelling. Hits are taken
/// left to right without overlap; an empty query leaves the text whole.
pub fn highlight(text: &str, query: &str) -> Vec<MatchSegment> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vec![MatchSegment::Plain(text.to_string())];
    }

    // Lowercasing can change byte lengths, so track which original offset
    // each lowered byte came from before searching the lowered text.
    let mut lowered = String::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len() + 1);
    for (offset, ch) in text.char_indices() {
        for low in ch.to_lowercase() {
            for _ in 0..low.len_utf8() {
                origin.push(offset);
            }
            lowered.push(low);
        }
    }
    origin.push(text.len());

    let mut segments = Vec::new();
    let mut consumed = 0;
    let mut pos = 0;
    while let Some(found) = lowered[pos..].find(&query) {
        let start = pos + found;
        let end = start + query.len();
        let orig_start = origin[start];
        let orig_end = origin[end];
        pos = end;
        if orig_start < consumed || orig_end <= orig_start {
            continue;
        }
        if orig_start > consumed {
            segments.push(MatchSegment::Plain(text[consumed..orig_start].to_string()));
        }
        segments.push(MatchSegment::Match(text[orig_start..orig_end].to_string()));
        consumed = orig_end;
    }
    if consumed < text.len() || segments.is_empty() {
        segments.push(MatchSegment::Plain(text[consumed..].to_string()));
    }
    segments
}
