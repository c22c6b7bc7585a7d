//! Entity structs for the Atlas domain.
//!
//! Each entity maps to a table of the `world` schema (`country`, `city`,
//! `countrylanguage`). All structs derive `Serialize` and `Deserialize` so the
//! CLI can render them as JSON.

mod country;
mod language;

pub use country::{Capital, Country, CountrySummary};
pub use language::Language;
