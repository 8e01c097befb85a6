//! # Application State
//!
//! Plain state containers owning the authoritative snapshots:
//!
//! - [`todos::TodoList`]: add, toggle, delete, list
//! - [`settings::Settings`]: get, set
//!
//! Mutations are synchronous against memory. Persistence is queued through a
//! [`crate::persist::Persister`] and never awaited by the caller. Listings are
//! owned copies; a client cannot mutate state behind the container's back.

pub mod settings;
pub mod todos;
