//! The case store: the single application-state object.
//!
//! `CaseStore` owns the ordered case collection and the active selection,
//! and enforces the lifecycle rules: partition transitions, selection
//! reassignment, archived-only deletion, and the active-row reorder. All
//! mutations go through it; derived views read `cases()` and recompute.
//!
//! Ids come from an injected [`IdGen`] so tests can produce deterministic
//! ids; production uses random v4 UUIDs.

use uuid::Uuid;

use crate::error::{DocketError, Result};
use crate::fields::FieldEdit;
use crate::model::{Case, Partition};

pub trait IdGen {
    fn next(&mut self) -> Uuid;
}

/// Production generator: random v4.
pub struct UuidGen;

impl IdGen for UuidGen {
    fn next(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic sequential generator, mainly for tests.
pub struct SeqGen(u128);

impl SeqGen {
    pub fn new() -> Self {
        SeqGen(0)
    }
}

impl Default for SeqGen {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGen for SeqGen {
    fn next(&mut self) -> Uuid {
        self.0 += 1;
        Uuid::from_u128(self.0)
    }
}

/// Where a dragged case lands relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSlot {
    Before,
    After,
}

pub struct CaseStore {
    cases: Vec<Case>,
    active_id: Option<Uuid>,
    ids: Box<dyn IdGen>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::with_ids(Box::new(UuidGen))
    }

    pub fn with_ids(ids: Box<dyn IdGen>) -> Self {
        Self {
            cases: Vec::new(),
            active_id: None,
            ids,
        }
    }

    pub fn next_id(&mut self) -> Uuid {
        self.ids.next()
    }

    /// The generator itself, for codec paths that backfill many ids.
    pub fn ids_mut(&mut self) -> &mut dyn IdGen {
        self.ids.as_mut()
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn get(&self, id: Uuid) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Case> {
        self.cases.iter_mut().find(|c| c.id == id)
    }

    /// First case whose number matches, case-insensitively.
    pub fn find_by_number(&self, number: &str) -> Option<&Case> {
        self.cases
            .iter()
            .find(|c| !c.number.is_empty() && c.number.eq_ignore_ascii_case(number))
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active_id
    }

    pub fn active(&self) -> Option<&Case> {
        self.active_id.and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Case> {
        let id = self.active_id?;
        self.get_mut(id)
    }

    /// Creates a case with defaults, prepends it, and selects it.
    pub fn create(&mut self) -> &Case {
        let id = self.ids.next();
        self.cases.insert(0, Case::new(id));
        self.active_id = Some(id);
        &self.cases[0]
    }

    /// Sets the selection to any live case, whatever its partition.
    /// An unknown id is ignored.
    pub fn select(&mut self, id: Uuid) {
        if self.get(id).is_some() {
            self.active_id = Some(id);
        }
    }

    /// Replaces the whole collection. Records are expected canonical; the
    /// selection resets to the first active case.
    pub fn load(&mut self, cases: Vec<Case>) {
        self.cases = cases;
        self.active_id = self.first_active_id();
    }

    /// Permanently removes a case. Only archived cases can be removed; if the
    /// removed case held the selection, it moves to the first remaining
    /// active case.
    pub fn remove(&mut self, id: Uuid) -> Result<Case> {
        let pos = self
            .cases
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
        if self.cases[pos].partition() != Partition::Archived {
            return Err(DocketError::NotArchived(
                self.cases[pos].tab_label().to_string(),
            ));
        }
        let removed = self.cases.remove(pos);
        if self.active_id == Some(id) {
            self.active_id = self.first_active_id();
        }
        Ok(removed)
    }

    /// `Active|PostLive -> Archived` and back. Archiving the selected case
    /// moves the selection to the first remaining active case. Unarchiving
    /// returns the case to the active partition, clearing a stale post-live
    /// flag so precedence cannot park it elsewhere.
    pub fn set_archived(&mut self, id: Uuid, value: bool) {
        let Some(case) = self.get_mut(id) else {
            return;
        };
        if case.is_archived == value {
            return;
        }
        case.is_archived = value;
        if value {
            if self.active_id == Some(id) {
                self.active_id = self.first_active_id();
            }
        } else if let Some(case) = self.get_mut(id) {
            case.is_post_live = false;
        }
    }

    /// `Active <-> PostLive`. Marking the selected case post-live moves the
    /// selection to the first remaining active case.
    pub fn set_post_live(&mut self, id: Uuid, value: bool) {
        let Some(case) = self.get_mut(id) else {
            return;
        };
        if case.is_post_live == value {
            return;
        }
        let was_active = case.partition() == Partition::Active;
        case.is_post_live = value;
        if value && was_active && self.active_id == Some(id) {
            self.active_id = self.first_active_id();
        }
    }

    /// Flips the favorite bit; never touches partition or selection.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Option<bool> {
        let case = self.get_mut(id)?;
        case.is_favorite = !case.is_favorite;
        Some(case.is_favorite)
    }

    /// Applies a typed field edit. An unresolved id is silently ignored
    /// (returns false); partition flags go through the transitions above so
    /// the selection rules hold.
    pub fn apply(&mut self, id: Uuid, edit: &FieldEdit) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        match edit {
            FieldEdit::Archived(v) => self.set_archived(id, *v),
            FieldEdit::PostLive(v) => self.set_post_live(id, *v),
            other => {
                if let Some(case) = self.get_mut(id) {
                    other.apply_to(case);
                }
            }
        }
        true
    }

    /// Moves a case within the active tab row and rebuilds the store order
    /// as the reordered active row followed by everything else in its
    /// original relative order. Returns false when the move changes nothing.
    pub fn reorder(&mut self, dragged: Uuid, target: Uuid, slot: DropSlot) -> Result<bool> {
        self.require_active(dragged)?;
        self.require_active(target)?;
        if dragged == target {
            return Ok(false);
        }

        let row: Vec<Uuid> = self
            .cases
            .iter()
            .filter(|c| c.partition() == Partition::Active)
            .map(|c| c.id)
            .collect();

        let mut order = row.clone();
        let from = order.iter().position(|&id| id == dragged).unwrap_or(0);
        let moved = order.remove(from);
        let mut at = order.iter().position(|&id| id == target).unwrap_or(0);
        if slot == DropSlot::After {
            at += 1;
        }
        order.insert(at, moved);
        if order == row {
            return Ok(false);
        }

        let old = std::mem::take(&mut self.cases);
        let (mut active, rest): (Vec<Case>, Vec<Case>) = old
            .into_iter()
            .partition(|c| c.partition() == Partition::Active);
        active.sort_by_key(|c| {
            order
                .iter()
                .position(|&id| id == c.id)
                .unwrap_or(usize::MAX)
        });
        self.cases = active.into_iter().chain(rest).collect();
        Ok(true)
    }

    fn require_active(&self, id: Uuid) -> Result<()> {
        let case = self
            .get(id)
            .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
        if case.partition() != Partition::Active {
            return Err(DocketError::Api(format!(
                "Case {} is not in the active tab row",
                case.tab_label()
            )));
        }
        Ok(())
    }

    fn first_active_id(&self) -> Option<Uuid> {
        self.cases
            .iter()
            .find(|c| c.partition() == Partition::Active)
            .map(|c| c.id)
    }
}

impl Default for CaseStore {
    fn default() -> Self {
        Self::new()
    }
}
