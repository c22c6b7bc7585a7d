//! Repository modules for Atlas entities.
//!
//! Each module adds methods to `AtlasService` via `impl AtlasService` blocks.

pub mod cascade;
pub mod catalog;
pub mod country;
pub mod language;
