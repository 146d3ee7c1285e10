//! # Docket Architecture
//!
//! Docket is a **UI-agnostic case-tracking library**. The CLI in this crate
//! is one client of it; the core never assumes a terminal.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, render.rs, wired by main.rs)           │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and a persistence backend                 │
//! │  - Runs a command, saves state after successful mutations   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic against `&mut CaseStore`                  │
//! │  - Returns structured `CmdResult`s, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State Layer (store.rs, persist/)                           │
//! │  - `CaseStore`: ordered cases plus the active selection     │
//! │  - `StateStore` trait; FileStore (production),              │
//! │    InMemoryStore (testing)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Partition Model
//!
//! Every case sits in exactly one of three partitions, derived from two
//! flags (`is_archived` wins over `is_post_live`): the active row, shown as
//! `1..n` in a user-controlled order; post-live (`p1..`); and archived
//! (`a1..`). Display indexes are assigned fresh per listing. The underlying
//! store keeps one flat order and only the active row can be rearranged; see
//! [`store`] and [`index`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never touches stdout or the process exit code.
//! Confirmation for destructive operations is injected as a callback, so a
//! GUI or a test can answer the prompt. The import/export/report commands
//! are the deliberate exception: moving files is their whole job.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the business logic over
//!    fixture-built stores. The lion's share of testing lives here.
//! 2. **API** (`api.rs`): persistence round-trips against `InMemoryStore`.
//! 3. **CLI**: end-to-end tests in `tests/` drive the compiled binary
//!    against a scratch data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade owning the store and its persistence backend
//! - [`commands`]: business logic for each operation
//! - [`store`]: the application-state object and lifecycle rules
//! - [`persist`]: storage backends and the view state
//! - [`model`]: core data types (`Case` and its children)
//! - [`workflow`]: the grouped status ladder and its labels
//! - [`index`]: display indexing and selectors (`1`, `p1`, `a1`, numbers)
//! - [`fields`]: typed field edits parsed from key/value strings
//! - [`snapshot`]: the JSON case-file codec, import/export format
//! - [`search`](commands::search): substring search with match highlighting
//! - [`report`]: the plain-text reference report
//! - [`config`]: user configuration
//! - [`error`]: error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod index;
pub mod model;
pub mod persist;
pub mod report;
pub mod snapshot;
pub mod store;
pub mod workflow;

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures;
