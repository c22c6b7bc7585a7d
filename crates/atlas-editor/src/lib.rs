//! # atlas-editor
//!
//! The edit session state machine between a presentation layer and the
//! Atlas repositories.
//!
//! An [`EditSession`] owns the current [`EditMode`](atlas_core::enums::EditMode),
//! the operator's drafts, and the [`SessionSnapshot`] of the selected country.
//! Every action validates first, awaits its store call, and only then moves
//! to the next mode. Failures leave mode, drafts and snapshot untouched.

pub mod confirm;
pub mod error;
pub mod session;
pub mod snapshot;

pub use confirm::{AlwaysConfirm, Confirm, ConfirmRequest, NeverConfirm};
pub use error::{EditError, ErrorKind};
pub use session::{DeleteOutcome, EditSession};
pub use snapshot::SessionSnapshot;
