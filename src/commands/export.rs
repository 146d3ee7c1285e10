//! Writes the whole store to a timestamped snapshot file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::snapshot;
use crate::store::CaseStore;

pub fn run(store: &CaseStore, output: Option<&Path>) -> Result<CmdResult> {
    let path: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(snapshot::export_filename(&Local::now())),
    };
    let bytes = snapshot::serialize(store.cases())?;
    fs::write(&path, bytes)?;

    let count = store.len();
    let noun = if count == 1 { "case" } else { "cases" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} {} to {}",
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
    use crate::store::SeqGen;

    #[test]
    fn test_export_writes_a_loadable_snapshot() {
        let store = StoreFixture::new()
            .with_case("Checkout", "CS-1")
            .with_archived_case("Legacy", "CS-2")
            .build();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let result = run(&store, Some(&path)).unwrap();
        assert!(result.messages[0].content.contains("Exported 2 cases"));

        let bytes = fs::read(&path).unwrap();
        let cases = snapshot::parse(&bytes, &mut SeqGen::new()).unwrap();
        assert_eq!(cases, store.cases());
    }

    #[test]
    fn test_singular_message_for_one_case() {
        let store = StoreFixture::new().with_case("Checkout", "CS-1").build();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let result = run(&store, Some(&path)).unwrap();
        assert!(result.messages[0].content.contains("Exported 1 case to"));
    }
}
