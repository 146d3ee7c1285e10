//! Product references on a case. A reference is a named link into the
//! merchandising catalog; every column except the name is optional.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::index::CaseSelector;
use crate::model::Reference;
use crate::store::CaseStore;
use uuid::Uuid;

/// Optional columns accepted by both `add` and `edit`.
#[derive(Debug, Clone, Default)]
pub struct ReferenceFields {
    pub name: Option<String>,
    pub url: Option<String>,
    pub profile: Option<String>,
    pub collection: Option<String>,
    pub product_id: Option<String>,
}

impl ReferenceFields {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.url.is_none()
            && self.profile.is_none()
            && self.collection.is_none()
            && self.product_id.is_none()
    }

    fn apply_to(&self, reference: &mut Reference) {
        if let Some(name) = &self.name {
            reference.name = name.clone();
        }
        if let Some(url) = &self.url {
            reference.url = url.clone();
        }
        if let Some(profile) = &self.profile {
            reference.profile = profile.clone();
        }
        if let Some(collection) = &self.collection {
            reference.collection = collection.clone();
        }
        if let Some(product_id) = &self.product_id {
            reference.product_id = product_id.clone();
        }
    }
}

pub fn add(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    name: &str,
    fields: &ReferenceFields,
) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(DocketError::Api(
            "Reference name cannot be empty".to_string(),
        ));
    }
    let id = helpers::resolve_target(store, selector)?;
    let reference_id = store.next_id();
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    let mut reference = Reference::new(reference_id, name.to_string());
    fields.apply_to(&mut reference);
    // The positional name wins over any name passed in the field set.
    reference.name = name.to_string();
    case.references.insert(0, reference);

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Added reference [{}] to case {}",
            name,
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

pub fn edit(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    position: usize,
    fields: &ReferenceFields,
) -> Result<CmdResult> {
    if fields.is_empty() {
        return Err(DocketError::Api("Nothing to update".to_string()));
    }
    let id = helpers::resolve_target(store, selector)?;
    let reference_id = reference_at(store, id, position)?;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    if let Some(reference) = case.references.iter_mut().find(|r| r.id == reference_id) {
        fields.apply_to(reference);
    }

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Updated reference {} on case {}",
            position,
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

pub fn remove(
    store: &mut CaseStore,
    selector: Option<&CaseSelector>,
    position: usize,
) -> Result<CmdResult> {
    let id = helpers::resolve_target(store, selector)?;
    let reference_id = reference_at(store, id, position)?;
    let case = store
        .get_mut(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    case.references.retain(|r| r.id != reference_id);

    let mut result = CmdResult::default();
    if let Some(dc) = helpers::display_of(store, id) {
        result.add_message(CmdMessage::success(format!(
            "Removed reference {} from case {}",
            position,
            dc.case.tab_label()
        )));
        result.affected_cases.push(dc.case);
    }
    Ok(result)
}

fn reference_at(store: &CaseStore, id: Uuid, position: usize) -> Result<Uuid> {
    let case = store
        .get(id)
        .ok_or_else(|| DocketError::CaseNotFound(id.to_string()))?;
    position
        .checked_sub(1)
        .and_then(|i| case.references.get(i))
        .map(|reference| reference.id)
        .ok_or_else(|| {
            DocketError::Api(format!(
                "No reference {} on case {}",
                position,
                case.tab_label()
            ))
        })
}
