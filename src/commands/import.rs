//! Replaces the store from a snapshot file. The payload is parsed in full
//! before anything is swapped in, so a bad file leaves the current state
//! alone.

use std::fs;
use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DocketError, Result};
use crate::snapshot;
use crate::store::CaseStore;

pub fn run(store: &mut CaseStore, path: &Path) -> Result<CmdResult> {
    let bytes = fs::read(path)
        .map_err(|e| DocketError::Api(format!("Cannot read {}: {}", path.display(), e)))?;
    let cases = snapshot::parse(&bytes, store.ids_mut())?;
    let count = cases.len();
    store.load(cases);

    let noun = if count == 1 { "case" } else { "cases" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} {} from {}",
        count,
        noun,
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::StoreFixture;

    #[test]
    fn test_import_replaces_the_store() {
        let mut store = StoreFixture::new().with_case("Old", "CS-0").build();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(
            &path,
            r#"[{"title": "Checkout", "number": "CS-1"}, {"title": "Landing", "number": "CS-2", "isArchived": true}]"#,
        )
        .unwrap();

        let result = run(&mut store, &path).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.find_by_number("CS-0").is_none());
        assert_eq!(store.active().unwrap().number, "CS-1");
        assert!(result.messages[0].content.contains("Imported 2 cases"));
    }

    #[test]
    fn test_bad_payload_keeps_the_current_store() {
        let mut store = StoreFixture::new().with_case("Old", "CS-0").build();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = run(&mut store, &path).unwrap_err();
        assert!(matches!(err, DocketError::Snapshot(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.active().unwrap().number, "CS-0");
    }

    #[test]
    fn test_missing_file_is_reported_with_its_path() {
        let mut store = StoreFixture::new().build();
        let err = run(&mut store, Path::new("/nonexistent/import.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/import.json"));
    }
}
