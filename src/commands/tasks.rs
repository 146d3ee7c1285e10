//! Cross-case task roll-up: every unchecked checklist item, from every
//! partition, in store order.

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Partition;
use crate::store::CaseStore;
use uuid::Uuid;

/// One open checklist item with enough context to print its home case.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingTask {
    pub case_id: Uuid,
    pub case_number: String,
    pub text: String,
    pub partition: Partition,
}

pub fn collect(store: &CaseStore) -> Vec<PendingTask> {
    let mut tasks = Vec::new();
    for case in store.cases() {
        for item in case.checklist.iter().filter(|i| !i.is_done) {
            tasks.push(PendingTask {
                case_id: case.id,
                case_number: case.tab_label().to_string(),
                text: item.text.clone(),
                partition: case.partition(),
            });
        }
    }
    tasks
}

pub fn run(store: &CaseStore) -> Result<CmdResult> {
    let tasks = collect(store);
    let mut result = CmdResult::default();
    if tasks.is_empty() {
        result.add_message(CmdMessage::info("No pending tasks"));
    }
    result.listed_cases = helpers::indexed_cases(store);
    result.tasks = tasks;
    Ok(result)
}
