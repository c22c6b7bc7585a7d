//! Operator confirmation before destructive actions.

use std::fmt;

/// What the operator is asked to approve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmRequest<'a> {
    DeleteCountry {
        code: &'a str,
        name: &'a str,
        languages: usize,
    },
    DeleteLanguage {
        code: &'a str,
        language: &'a str,
    },
}

impl fmt::Display for ConfirmRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeleteCountry {
                code,
                name,
                languages,
            } => write!(
                f,
                "Delete country {name} ({code}) and its {languages} language(s)?"
            ),
            Self::DeleteLanguage { code, language } => {
                write!(f, "Delete language {language} from {code}?")
            }
        }
    }
}

/// Asks the operator to approve a deletion.
pub trait Confirm: Send + Sync {
    fn confirm(&self, request: &ConfirmRequest<'_>) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmRequest<'_>) -> bool + Send + Sync,
{
    fn confirm(&self, request: &ConfirmRequest<'_>) -> bool {
        self(request)
    }
}

/// Approves everything. Used when confirmation is disabled or pre-given.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _request: &ConfirmRequest<'_>) -> bool {
        true
    }
}

/// Declines everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&self, _request: &ConfirmRequest<'_>) -> bool {
        false
    }
}
