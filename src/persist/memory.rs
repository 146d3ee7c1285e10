use super::{StateStore, ViewState};
use crate::error::{DocketError, Result};
use crate::model::Case;
use crate::store::IdGen;

/// In-memory backend for tests: holds the canonical state directly.
#[derive(Default)]
pub struct InMemoryStore {
    cases: Vec<Case>,
    view: ViewState,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(cases: Vec<Case>, view: ViewState) -> Self {
        Self {
            cases,
            view,
            fail_saves: false,
        }
    }

    /// Makes every subsequent save fail, for error-path tests.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

impl StateStore for InMemoryStore {
    fn load(&self, _ids: &mut dyn IdGen) -> Result<(Vec<Case>, ViewState)> {
        Ok((self.cases.clone(), self.view.clone()))
    }

    fn save(&mut self, cases: &[Case], view: &ViewState) -> Result<()> {
        if self.fail_saves {
            return Err(DocketError::Store("Simulated write error".to_string()));
        }
        self.cases = cases.to_vec();
        self.view = view.clone();
        Ok(())
    }
}
