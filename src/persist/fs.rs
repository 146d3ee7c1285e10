use std::fs;
use std::path::PathBuf;

use super::{StateStore, ViewState};
use crate::error::{DocketError, Result};
use crate::model::Case;
use crate::snapshot;
use crate::store::IdGen;

const CASES_FILENAME: &str = "cases.json";
const VIEW_FILENAME: &str = "view.json";

/// File-backed state: `cases.json` (the snapshot) and `view.json` beside it
/// in one data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn cases_path(&self) -> PathBuf {
        self.root.join(CASES_FILENAME)
    }

    fn view_path(&self) -> PathBuf {
        self.root.join(VIEW_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DocketError::Io)?;
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load(&self, ids: &mut dyn IdGen) -> Result<(Vec<Case>, ViewState)> {
        let cases_path = self.cases_path();
        if !cases_path.exists() {
            return Ok((Vec::new(), ViewState::default()));
        }
        let bytes = fs::read(&cases_path).map_err(DocketError::Io)?;
        let cases = snapshot::parse(&bytes, ids)?;

        // The view file is droppable presentation state; anything unreadable
        // falls back to defaults.
        let view = fs::read(self.view_path())
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();

        Ok((cases, view))
    }

    fn save(&mut self, cases: &[Case], view: &ViewState) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.cases_path(), snapshot::serialize(cases)?).map_err(DocketError::Io)?;
        let view_bytes = serde_json::to_vec_pretty(view).map_err(DocketError::Serialization)?;
        fs::write(self.view_path(), view_bytes).map_err(DocketError::Io)?;
        Ok(())
    }
}
