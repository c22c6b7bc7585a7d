//! Edit modes and the actions that move between them.
//!
//! All enums use `snake_case` serialization. `EditMode` is closed: the only
//! way to change it is `EditMode::next`, which the editor calls after an
//! action has fully succeeded.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EditAction
// ---------------------------------------------------------------------------

/// Operator-initiated actions understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditAction {
    SelectCountry,
    ClearSelection,
    SelectLanguage,
    BeginAddCountry,
    BeginEditCountry,
    SaveCountry,
    CancelCountry,
    DeleteCountry,
    BeginAddLanguage,
    AcceptLanguage,
    CancelLanguage,
    DeleteLanguage,
}

impl EditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelectCountry => "select_country",
            Self::ClearSelection => "clear_selection",
            Self::SelectLanguage => "select_language",
            Self::BeginAddCountry => "begin_add_country",
            Self::BeginEditCountry => "begin_edit_country",
            Self::SaveCountry => "save_country",
            Self::CancelCountry => "cancel_country",
            Self::DeleteCountry => "delete_country",
            Self::BeginAddLanguage => "begin_add_language",
            Self::AcceptLanguage => "accept_language",
            Self::CancelLanguage => "cancel_language",
            Self::DeleteLanguage => "delete_language",
        }
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EditMode
// ---------------------------------------------------------------------------

/// Mode of the edit session.
///
/// ```text
/// browsing → adding_country   → browsing (save | cancel)
///          → editing_country  → browsing (save | cancel)
///          → adding_language  → browsing (accept | cancel)
/// browsing → browsing (select, clear, delete country, delete language)
/// ```
///
/// Country editing and language editing are mutually exclusive: each can only
/// be entered from `Browsing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Browsing,
    AddingCountry,
    EditingCountry,
    AddingLanguage,
}

impl EditMode {
    /// Actions accepted in this mode.
    #[must_use]
    pub const fn allowed_actions(self) -> &'static [EditAction] {
        match self {
            Self::Browsing => &[
                EditAction::SelectCountry,
                EditAction::ClearSelection,
                EditAction::SelectLanguage,
                EditAction::BeginAddCountry,
                EditAction::BeginEditCountry,
                EditAction::DeleteCountry,
                EditAction::BeginAddLanguage,
                EditAction::DeleteLanguage,
            ],
            Self::AddingCountry | Self::EditingCountry => {
                &[EditAction::SaveCountry, EditAction::CancelCountry]
            }
            Self::AddingLanguage => &[EditAction::AcceptLanguage, EditAction::CancelLanguage],
        }
    }

    /// Check whether `action` may be attempted in this mode.
    #[must_use]
    pub fn permits(self, action: EditAction) -> bool {
        self.allowed_actions().contains(&action)
    }

    /// Mode reached once `action` has succeeded, or `None` if the action is
    /// not accepted here.
    #[must_use]
    pub const fn next(self, action: EditAction) -> Option<Self> {
        match (self, action) {
            (
                Self::Browsing,
                EditAction::SelectCountry
                | EditAction::ClearSelection
                | EditAction::SelectLanguage
                | EditAction::DeleteCountry
                | EditAction::DeleteLanguage,
            )
            | (
                Self::AddingCountry | Self::EditingCountry,
                EditAction::SaveCountry | EditAction::CancelCountry,
            )
            | (Self::AddingLanguage, EditAction::AcceptLanguage | EditAction::CancelLanguage) => {
                Some(Self::Browsing)
            }
            (Self::Browsing, EditAction::BeginAddCountry) => Some(Self::AddingCountry),
            (Self::Browsing, EditAction::BeginEditCountry) => Some(Self::EditingCountry),
            (Self::Browsing, EditAction::BeginAddLanguage) => Some(Self::AddingLanguage),
            _ => None,
        }
    }

    /// Whether the country draft is open for input.
    #[must_use]
    pub const fn is_editing_country(self) -> bool {
        matches!(self, Self::AddingCountry | Self::EditingCountry)
    }

    /// Whether the country code field is editable. Only a new country may
    /// choose its code.
    #[must_use]
    pub const fn code_editable(self) -> bool {
        matches!(self, Self::AddingCountry)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::AddingCountry => "adding_country",
            Self::EditingCountry => "editing_country",
            Self::AddingLanguage => "adding_language",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
