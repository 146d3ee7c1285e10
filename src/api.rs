//! The embedding surface: one type that owns the store and a persistence
//! backend, runs commands against the store and saves after every mutation.
//!
//! Read-only operations never write. Mutating operations persist the full
//! state (snapshot plus view state) on success; a failed command leaves the
//! backend as it was.

use std::path::Path;

use crate::commands::reference::ReferenceFields;
use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::fields::FieldEdit;
use crate::index::CaseSelector;
use crate::model::Case;
use crate::persist::{StateStore, ViewState};
use crate::report::RefColumn;
use crate::store::{CaseStore, DropSlot, IdGen, UuidGen};

pub struct DocketApi<S: StateStore> {
    backend: S,
    store: CaseStore,
}

impl<S: StateStore> DocketApi<S> {
    pub fn open(backend: S) -> Result<Self> {
        Self::open_with(backend, Box::new(UuidGen))
    }

    /// Opens with an explicit id generator. The stored selection is restored
    /// when it still points at a case; otherwise the load default stands.
    pub fn open_with(backend: S, ids: Box<dyn IdGen>) -> Result<Self> {
        let mut store = CaseStore::with_ids(ids);
        let (cases, view) = backend.load(store.ids_mut())?;
        store.load(cases);
        if let Some(id) = view.active_case_id {
            store.select(id);
        }
        Ok(Self { backend, store })
    }

    pub fn store(&self) -> &CaseStore {
        &self.store
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn persist(&mut self) -> Result<()> {
        let view = ViewState {
            active_case_id: self.store.active_id(),
        };
        self.backend.save(self.store.cases(), &view)
    }

    fn mutate<F>(&mut self, op: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut CaseStore) -> Result<CmdResult>,
    {
        let result = op(&mut self.store)?;
        self.persist()?;
        Ok(result)
    }

    pub fn create_case(&mut self, title: Option<String>, number: Option<String>) -> Result<CmdResult> {
        self.mutate(|store| commands::create::run(store, title, number))
    }

    pub fn open_case(&mut self, selector: &CaseSelector) -> Result<CmdResult> {
        self.mutate(|store| commands::select::run(store, selector))
    }

    pub fn list(&self, filter: commands::list::ListFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_case(&self, selector: Option<&CaseSelector>) -> Result<CmdResult> {
        commands::view::run(&self.store, selector)
    }

    pub fn update_case(
        &mut self,
        selector: Option<&CaseSelector>,
        edits: &[FieldEdit],
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::update::run(store, selector, edits))
    }

    pub fn archive_case(
        &mut self,
        selector: Option<&CaseSelector>,
        confirm: &mut dyn FnMut(&Case) -> bool,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::lifecycle::archive(store, selector, confirm))
    }

    pub fn unarchive_case(&mut self, selector: &CaseSelector) -> Result<CmdResult> {
        self.mutate(|store| commands::lifecycle::unarchive(store, selector))
    }

    pub fn set_post_live(
        &mut self,
        selector: Option<&CaseSelector>,
        value: bool,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::lifecycle::set_post_live(store, selector, value))
    }

    pub fn toggle_favorite(&mut self, selector: Option<&CaseSelector>) -> Result<CmdResult> {
        self.mutate(|store| commands::lifecycle::toggle_favorite(store, selector))
    }

    pub fn delete_case(
        &mut self,
        selector: &CaseSelector,
        confirm: &mut dyn FnMut(&Case) -> bool,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::delete::run(store, selector, confirm))
    }

    pub fn reorder_case(
        &mut self,
        dragged: &CaseSelector,
        target: &CaseSelector,
        slot: DropSlot,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::reorder::run(store, dragged, target, slot))
    }

    pub fn add_diary_entry(
        &mut self,
        selector: Option<&CaseSelector>,
        text: &str,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::diary::add(store, selector, text))
    }

    pub fn edit_diary_entry(
        &mut self,
        selector: Option<&CaseSelector>,
        position: usize,
        text: &str,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::diary::edit(store, selector, position, text))
    }

    pub fn remove_diary_entry(
        &mut self,
        selector: Option<&CaseSelector>,
        position: usize,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::diary::remove(store, selector, position))
    }

    pub fn add_task(&mut self, selector: Option<&CaseSelector>, text: &str) -> Result<CmdResult> {
        self.mutate(|store| commands::checklist::add(store, selector, text))
    }

    pub fn set_task_done(
        &mut self,
        selector: Option<&CaseSelector>,
        position: usize,
        done: bool,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::checklist::set_done(store, selector, position, done))
    }

    pub fn edit_task(
        &mut self,
        selector: Option<&CaseSelector>,
        position: usize,
        text: &str,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::checklist::edit(store, selector, position, text))
    }

    pub fn remove_task(
        &mut self,
        selector: Option<&CaseSelector>,
        position: usize,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::checklist::remove(store, selector, position))
    }

    pub fn add_reference(
        &mut self,
        selector: Option<&CaseSelector>,
        name: &str,
        fields: &ReferenceFields,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::reference::add(store, selector, name, fields))
    }

    pub fn edit_reference(
        &mut self,
        selector: Option<&CaseSelector>,
        position: usize,
        fields: &ReferenceFields,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::reference::edit(store, selector, position, fields))
    }

    pub fn remove_reference(
        &mut self,
        selector: Option<&CaseSelector>,
        position: usize,
    ) -> Result<CmdResult> {
        self.mutate(|store| commands::reference::remove(store, selector, position))
    }

    pub fn add_tag(&mut self, selector: Option<&CaseSelector>, tag: &str) -> Result<CmdResult> {
        self.mutate(|store| commands::tags::add(store, selector, tag))
    }

    pub fn remove_tag(&mut self, selector: Option<&CaseSelector>, tag: &str) -> Result<CmdResult> {
        self.mutate(|store| commands::tags::remove(store, selector, tag))
    }

    pub fn pending_tasks(&self) -> Result<CmdResult> {
        commands::tasks::run(&self.store)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn reference_report(
        &self,
        selector: Option<&CaseSelector>,
        columns: &[RefColumn],
        output: Option<&Path>,
    ) -> Result<CmdResult> {
        commands::report::run(&self.store, selector, columns, output)
    }

    pub fn export(&self, output: Option<&Path>) -> Result<CmdResult> {
        commands::export::run(&self.store, output)
    }

    pub fn import(&mut self, path: &Path) -> Result<CmdResult> {
        self.mutate(|store| commands::import::run(store, path))
    }
}
