//! Builders for store state in tests.
//!
//! `StoreFixture` assembles cases in declaration order (first added is first
//! in store order) with deterministic sequential ids, then hands back a
//! ready [`CaseStore`] whose generator continues the same sequence.

use crate::model::{Case, ChecklistItem, DiaryEntry, Reference};
use crate::store::{CaseStore, IdGen, SeqGen};
use crate::workflow::Status;

#[derive(Default)]
pub struct StoreFixture {
    cases: Vec<Case>,
    ids: SeqGen,
}

impl StoreFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case(mut self, title: &str, number: &str) -> Self {
        let id = self.ids.next();
        let mut case = Case::new(id);
        case.title = title.to_string();
        case.number = number.to_string();
        self.cases.push(case);
        self
    }

    pub fn with_archived_case(self, title: &str, number: &str) -> Self {
        let mut fixture = self.with_case(title, number);
        fixture.last().is_archived = true;
        fixture
    }

    pub fn with_post_live_case(self, title: &str, number: &str) -> Self {
        let mut fixture = self.with_case(title, number);
        fixture.last().is_post_live = true;
        fixture
    }

    /// Sets the status of the most recently added case.
    pub fn with_status(mut self, status: Status) -> Self {
        self.last().status = status;
        self
    }

    pub fn with_favorite(mut self) -> Self {
        self.last().is_favorite = true;
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        let case = self.cases.last_mut().expect("add a case first");
        case.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Adds a checklist item to the most recently added case. Children go in
    /// newest-first, so the last one declared sits at position 1.
    pub fn with_task(mut self, text: &str, done: bool) -> Self {
        let id = self.ids.next();
        let mut item = ChecklistItem::new(id, text.to_string());
        item.is_done = done;
        self.last().checklist.insert(0, item);
        self
    }

    pub fn with_diary_entry(mut self, text: &str) -> Self {
        let id = self.ids.next();
        let entry = DiaryEntry::new(id, text.to_string());
        self.last().diary.insert(0, entry);
        self
    }

    pub fn with_reference(mut self, name: &str, url: &str) -> Self {
        let id = self.ids.next();
        let mut reference = Reference::new(id, name.to_string());
        reference.url = url.to_string();
        self.last().references.insert(0, reference);
        self
    }

    /// Builds the store; selection is the first active case, as after a load.
    pub fn build(self) -> CaseStore {
        let mut store = CaseStore::with_ids(Box::new(self.ids));
        store.load(self.cases);
        store
    }

    fn last(&mut self) -> &mut Case {
        self.cases.last_mut().expect("add a case first")
    }
}
