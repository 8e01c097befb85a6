//! # todoapp Architecture
//!
//! todoapp is a **UI-agnostic to-do library** with a small terminal client on
//! top. Any front end (the bundled CLI, a GUI, a test) drives the same state
//! containers through the same facade.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the state containers                    │
//! │  - Resolves display indexes → todo ids                      │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State Layer (state/)                                       │
//! │  - TodoList and Settings own the in-memory snapshots        │
//! │  - Synchronous mutations, fire-and-forget persistence       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (persist.rs) + Storage Layer (store/)          │
//! │  - One FIFO writer thread per store file                    │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! │  - load never fails, save logs and swallows errors          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through the `log` facade.
//!
//! ## Write Ordering
//!
//! Mutations return as soon as memory is updated. The full snapshot is then
//! queued on the store's single writer, so two persists of the same file can
//! never interleave or land out of order. See [`persist`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`state`]: Todo list and settings containers
//! - [`persist`]: Background single-writer queue
//! - [`store`]: Storage abstraction, codecs and backends
//! - [`model`]: Core data types (`Todo`, `TodoId`, `SettingsMap`)
//! - [`index`]: Display indexing for the terminal client
//! - [`config`]: Data directory resolution and well-known settings
//! - [`logging`]: stderr logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod persist;
pub mod state;
pub mod store;
