//! Persistence backends for the working state.
//!
//! A backend stores two things: the case snapshot (the same format `export`
//! produces) and the view state (which case is selected). The core never
//! touches the filesystem itself; [`crate::api::DocketApi`] loads state
//! through this trait once per operation batch and saves after mutations.

pub mod fs;
pub mod memory;

pub use fs::FileStore;
pub use memory::InMemoryStore;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::model::Case;
use crate::store::IdGen;

/// Presentation state kept beside the snapshot, never inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub active_case_id: Option<Uuid>,
}

pub trait StateStore {
    /// Loads the stored cases (canonicalized through the snapshot codec,
    /// hence the generator) and the view state. A missing backing file is an
    /// empty store, not an error.
    fn load(&self, ids: &mut dyn IdGen) -> Result<(Vec<Case>, ViewState)>;

    /// Persists the full state.
    fn save(&mut self, cases: &[Case], view: &ViewState) -> Result<()>;
}
