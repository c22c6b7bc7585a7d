//! The edit session: mode, drafts and snapshot over one `AtlasService`.

use std::sync::Arc;

use atlas_config::EditorConfig;
use atlas_core::drafts::{CountryDraft, LanguageDraft};
use atlas_core::entities::{Country, CountrySummary, Language};
use atlas_core::enums::{EditAction, EditMode};
use atlas_core::errors::CoreError;
use atlas_db::repos::cascade::CascadeReport;
use atlas_db::service::AtlasService;

use crate::confirm::{AlwaysConfirm, Confirm, ConfirmRequest};
use crate::error::{EditError, ErrorKind};
use crate::snapshot::SessionSnapshot;

/// Result of a delete that needs operator approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome<T> {
    Deleted(T),
    /// The operator said no; nothing was touched.
    Declined,
}

/// One operator's editing session.
///
/// At most one of the country draft and the language draft is open, and
/// which one follows from [`EditMode`]. The mode only changes after the
/// store call behind an action has returned successfully.
pub struct EditSession {
    service: Arc<AtlasService>,
    config: EditorConfig,
    confirm: Box<dyn Confirm>,
    mode: EditMode,
    summaries: Vec<CountrySummary>,
    continents: Vec<String>,
    snapshot: Option<SessionSnapshot>,
    selected_language: Option<String>,
    country_draft: Option<CountryDraft>,
    language_draft: Option<LanguageDraft>,
}

impl EditSession {
    /// Start a session in `Browsing` with the summaries and continents loaded.
    ///
    /// # Errors
    ///
    /// Returns `EditError::DataAccess` if the initial reads fail.
    pub async fn open(service: Arc<AtlasService>, config: EditorConfig) -> Result<Self, EditError> {
        let mut session = Self {
            service,
            config,
            confirm: Box::new(AlwaysConfirm),
            mode: EditMode::Browsing,
            summaries: Vec::new(),
            continents: Vec::new(),
            snapshot: None,
            selected_language: None,
            country_draft: None,
            language_draft: None,
        };
        session.refresh_lists().await?;
        tracing::debug!(countries = session.summaries.len(), "edit session opened");
        Ok(session)
    }

    /// Use `confirm` to approve deletions.
    #[must_use]
    pub fn with_confirm(mut self, confirm: impl Confirm + 'static) -> Self {
        self.set_confirm(confirm);
        self
    }

    pub fn set_confirm(&mut self, confirm: impl Confirm + 'static) {
        self.confirm = Box::new(confirm);
    }

    // -- State --------------------------------------------------------------

    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    #[must_use]
    pub fn summaries(&self) -> &[CountrySummary] {
        &self.summaries
    }

    #[must_use]
    pub fn continents(&self) -> &[String] {
        &self.continents
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn selected_language(&self) -> Option<&str> {
        self.selected_language.as_deref()
    }

    /// The open country draft, present only while adding or editing a country.
    #[must_use]
    pub const fn country_draft(&self) -> Option<&CountryDraft> {
        self.country_draft.as_ref()
    }

    /// Mutable access to the open country draft.
    ///
    /// Changing `code` here has no effect on save while editing.
    pub const fn country_draft_mut(&mut self) -> Option<&mut CountryDraft> {
        self.country_draft.as_mut()
    }

    #[must_use]
    pub const fn language_draft(&self) -> Option<&LanguageDraft> {
        self.language_draft.as_ref()
    }

    pub const fn language_draft_mut(&mut self) -> Option<&mut LanguageDraft> {
        self.language_draft.as_mut()
    }

    // -- Reads --------------------------------------------------------------

    /// # Errors
    ///
    /// Returns `EditError::DataAccess` if the store cannot be read.
    pub async fn list_country_summaries(&self) -> Result<Vec<CountrySummary>, EditError> {
        Ok(self.service.list_country_summaries().await?)
    }

    /// # Errors
    ///
    /// Returns `EditError::NotFound` if no country has `code`.
    pub async fn load_country_detail(&self, code: &str) -> Result<Country, EditError> {
        Ok(self.service.get_country(code).await?)
    }

    /// # Errors
    ///
    /// Returns `EditError::DataAccess` if the store cannot be read.
    pub async fn list_languages(&self, code: &str) -> Result<Vec<Language>, EditError> {
        Ok(self.service.list_languages(code).await?)
    }

    /// Distinct continents, recomputed from the store on every call.
    ///
    /// # Errors
    ///
    /// Returns `EditError::DataAccess` if the store cannot be read.
    pub async fn list_categories(&self) -> Result<Vec<String>, EditError> {
        Ok(self.service.list_continents().await?)
    }

    // -- Browsing -----------------------------------------------------------

    /// Load `code` and its languages into a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless browsing. Returns
    /// `EditError::NotFound` if the country vanished; the previous selection
    /// is cleared in that case.
    pub async fn select_country(&mut self, code: &str) -> Result<&SessionSnapshot, EditError> {
        self.guard(EditAction::SelectCountry)?;

        let snapshot = self.load_or_forget(code).await?;
        tracing::debug!(code, languages = snapshot.languages().len(), "country selected");
        Ok(snapshot)
    }

    /// Drop the current selection.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless browsing; a draft open for the
    /// selected country keeps its snapshot.
    pub fn clear_selection(&mut self) -> Result<(), EditError> {
        self.guard(EditAction::ClearSelection)?;
        self.forget_selection();
        Ok(())
    }

    /// Mark one of the snapshot's languages as the delete target.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless browsing with a country selected,
    /// and `EditError::NotFound` if the selected country does not list `name`.
    pub fn select_language(&mut self, name: &str) -> Result<&Language, EditError> {
        self.guard(EditAction::SelectLanguage)?;
        let snapshot = self
            .snapshot
            .as_ref()
            .ok_or_else(|| nothing_selected("a country must be selected first"))?;
        let language = snapshot.language(name).ok_or_else(|| {
            EditError::NotFound(format!("{} does not list language '{name}'", snapshot.code()))
        })?;
        self.selected_language = Some(language.name.clone());
        Ok(language)
    }

    // -- Country editing ----------------------------------------------------

    /// Open an empty country draft with every field, the code included, editable.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless browsing.
    pub fn begin_add_country(&mut self) -> Result<&mut CountryDraft, EditError> {
        let next = self.guard(EditAction::BeginAddCountry)?;
        self.enter(next, EditAction::BeginAddCountry);
        Ok(self.country_draft.insert(CountryDraft::default()))
    }

    /// Open a draft prefilled from the selected country. Its code is fixed.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless browsing with a country selected.
    pub fn begin_edit_country(&mut self) -> Result<&mut CountryDraft, EditError> {
        let next = self.guard(EditAction::BeginEditCountry)?;
        let draft = CountryDraft::from_country(self.require_snapshot()?.country());
        self.enter(next, EditAction::BeginEditCountry);
        Ok(self.country_draft.insert(draft))
    }

    /// Replace the open draft with `fields` and persist it.
    ///
    /// Adding inserts a new country and selects it. Editing updates the
    /// selected country, keeping its code and capital, and reloads it. In
    /// both cases the summaries and continents are reloaded afterwards.
    ///
    /// # Errors
    ///
    /// Any failure before or during the write keeps the mode and the draft
    /// (holding `fields`) so the operator can correct and retry:
    /// `Validation` for bad input, `Conflict` for a taken code, `NotFound`
    /// if the edited country vanished, `DataAccess` otherwise. A failed
    /// reload after a committed write returns `DataAccess` in `Browsing`.
    pub async fn save_country(&mut self, fields: CountryDraft) -> Result<&SessionSnapshot, EditError> {
        let next = self.guard(EditAction::SaveCountry)?;
        self.country_draft = Some(fields);

        let code = match self.mode {
            EditMode::AddingCountry => {
                let country = self.parse_country_draft(|draft, config| {
                    draft.to_new_country(config.uppercase_codes)
                })?;
                self.service.insert_country(&country).await?;
                country.code
            }
            _ => {
                let original = self.require_snapshot()?.country().clone();
                let country =
                    self.parse_country_draft(|draft, _| draft.to_updated_country(&original))?;
                self.service.update_country(&country).await?;
                country.code
            }
        };

        self.enter(next, EditAction::SaveCountry);
        self.country_draft = None;
        self.refresh_lists().await?;
        self.load_or_forget(&code).await
    }

    /// Discard the country draft and show the prior snapshot, if any, again.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless adding or editing a country.
    pub fn cancel_country_edit(&mut self) -> Result<Option<&SessionSnapshot>, EditError> {
        let next = self.guard(EditAction::CancelCountry)?;
        self.country_draft = None;
        self.enter(next, EditAction::CancelCountry);
        Ok(self.snapshot.as_ref())
    }

    /// Delete the selected country and all its languages in one transaction.
    ///
    /// `code` must be the selected country. On success the selection is
    /// cleared and the summaries reloaded.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless browsing with `code` selected,
    /// `EditError::NotFound` if the country was already gone, and
    /// `EditError::DataAccess` if the transaction rolled back; the
    /// selection is kept in both failure cases.
    pub async fn delete_country(
        &mut self,
        code: &str,
    ) -> Result<DeleteOutcome<CascadeReport>, EditError> {
        self.guard(EditAction::DeleteCountry)?;
        let snapshot = self.require_selected(code)?;
        let request = ConfirmRequest::DeleteCountry {
            code,
            name: &snapshot.country().name,
            languages: snapshot.languages().len(),
        };
        if !self.approved(&request) {
            return Ok(DeleteOutcome::Declined);
        }

        let report = self.service.delete_country_cascade(code).await?;
        if !report.country_removed {
            return Err(EditError::NotFound(format!("country '{code}' not found")));
        }

        self.forget_selection();
        self.refresh_lists().await?;
        Ok(DeleteOutcome::Deleted(report))
    }

    // -- Language editing ---------------------------------------------------

    /// Open an empty language draft for the selected country.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless browsing with a country selected.
    pub fn begin_add_language(&mut self) -> Result<&mut LanguageDraft, EditError> {
        let next = self.guard(EditAction::BeginAddLanguage)?;
        self.require_snapshot()?;
        self.enter(next, EditAction::BeginAddLanguage);
        Ok(self.language_draft.insert(LanguageDraft::default()))
    }

    /// Replace the language draft with `fields`, insert it under the
    /// selected country and reload that country's languages.
    ///
    /// # Errors
    ///
    /// Failures keep `AddingLanguage` and the draft: `Validation` for a
    /// blank name or a percentage outside `[0, 100]`, `Conflict` if the
    /// country already lists the language, `DataAccess` otherwise.
    pub async fn accept_language(&mut self, fields: LanguageDraft) -> Result<&SessionSnapshot, EditError> {
        let next = self.guard(EditAction::AcceptLanguage)?;
        self.language_draft = Some(fields);

        let code = self.require_snapshot()?.code().to_string();
        let language = self
            .language_draft
            .as_ref()
            .map(LanguageDraft::to_language)
            .transpose()?
            .ok_or_else(|| nothing_selected("no language draft is open"))?;
        self.service.insert_language(&code, &language).await?;

        self.enter(next, EditAction::AcceptLanguage);
        self.language_draft = None;
        self.reload_languages(&code).await
    }

    /// Discard the language draft.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless adding a language.
    pub fn cancel_language_edit(&mut self) -> Result<(), EditError> {
        let next = self.guard(EditAction::CancelLanguage)?;
        self.language_draft = None;
        self.enter(next, EditAction::CancelLanguage);
        Ok(())
    }

    /// Remove `language` from the selected country `code`.
    ///
    /// # Errors
    ///
    /// Returns `EditError::Rejected` unless browsing with `code` selected,
    /// `EditError::NotFound` if the snapshot does not list `language`.
    pub async fn delete_language(
        &mut self,
        code: &str,
        language: &str,
    ) -> Result<DeleteOutcome<()>, EditError> {
        self.guard(EditAction::DeleteLanguage)?;
        self.require_selected(code)?;
        self.select_language(language)?;

        let request = ConfirmRequest::DeleteLanguage { code, language };
        if !self.approved(&request) {
            return Ok(DeleteOutcome::Declined);
        }

        self.service.delete_language(code, language).await?;
        self.reload_languages(code).await?;
        Ok(DeleteOutcome::Deleted(()))
    }

    // -- Internals ----------------------------------------------------------

    /// Check `action` against the current mode and return the mode it leads to.
    fn guard(&self, action: EditAction) -> Result<EditMode, EditError> {
        self.mode.next(action).ok_or_else(|| {
            tracing::warn!(mode = %self.mode, %action, "action rejected");
            CoreError::InvalidTransition {
                from: self.mode,
                action,
            }
            .into()
        })
    }

    fn enter(&mut self, next: EditMode, action: EditAction) {
        tracing::debug!(from = %self.mode, to = %next, %action, "edit mode changed");
        self.mode = next;
    }

    fn require_snapshot(&self) -> Result<&SessionSnapshot, EditError> {
        self.snapshot
            .as_ref()
            .ok_or_else(|| nothing_selected("a country must be selected first"))
    }

    fn require_selected(&self, code: &str) -> Result<&SessionSnapshot, EditError> {
        let snapshot = self.require_snapshot()?;
        if snapshot.code() == code {
            Ok(snapshot)
        } else {
            Err(nothing_selected(format!("country '{code}' is not selected")))
        }
    }

    fn approved(&self, request: &ConfirmRequest<'_>) -> bool {
        if !self.config.require_confirmation {
            return true;
        }
        let approved = self.confirm.confirm(request);
        if !approved {
            tracing::info!(%request, "deletion declined");
        }
        approved
    }

    fn parse_country_draft(
        &self,
        parse: impl FnOnce(&CountryDraft, &EditorConfig) -> Result<Country, CoreError>,
    ) -> Result<Country, EditError> {
        let draft = self
            .country_draft
            .as_ref()
            .ok_or_else(|| nothing_selected("no country draft is open"))?;
        Ok(parse(draft, &self.config)?)
    }

    async fn load_snapshot(&self, code: &str) -> Result<SessionSnapshot, EditError> {
        let country = self.service.get_country(code).await?;
        let languages = self.service.list_languages(code).await?;
        Ok(SessionSnapshot::new(country, languages))
    }

    /// Replace the snapshot with a fresh load of `code`.
    ///
    /// Only a vanished country drops the selection; any other failure keeps
    /// the previous snapshot.
    async fn load_or_forget(&mut self, code: &str) -> Result<&SessionSnapshot, EditError> {
        match self.load_snapshot(code).await {
            Ok(snapshot) => {
                self.selected_language = None;
                Ok(&*self.snapshot.insert(snapshot))
            }
            Err(e) => {
                if e.kind() == ErrorKind::NotFound {
                    self.forget_selection();
                }
                Err(e)
            }
        }
    }

    fn forget_selection(&mut self) {
        self.snapshot = None;
        self.selected_language = None;
    }

    async fn reload_languages(&mut self, code: &str) -> Result<&SessionSnapshot, EditError> {
        let languages = self.service.list_languages(code).await?;
        let snapshot = self
            .snapshot
            .as_ref()
            .map(|s| s.with_languages(languages))
            .ok_or_else(|| nothing_selected("a country must be selected first"))?;
        self.selected_language = None;
        Ok(&*self.snapshot.insert(snapshot))
    }

    async fn refresh_lists(&mut self) -> Result<(), EditError> {
        self.summaries = self.service.list_country_summaries().await?;
        self.continents = self.service.list_continents().await?;
        Ok(())
    }
}

fn nothing_selected(reason: impl Into<String>) -> EditError {
    CoreError::NothingSelected(reason.into()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn session() -> EditSession {
        let service = Arc::new(AtlasService::new_local(":memory:").await.unwrap());
        EditSession::open(service, EditorConfig::default()).await.unwrap()
    }

    #[tokio::test]
    async fn opens_browsing_with_nothing_selected() {
        let session = session().await;
        assert_eq!(session.mode(), EditMode::Browsing);
        assert!(session.snapshot().is_none());
        assert!(session.summaries().is_empty());
        assert!(session.country_draft().is_none());
        assert!(session.language_draft().is_none());
    }

    #[tokio::test]
    async fn edit_needs_a_selection() {
        let mut session = session().await;
        let err = session.begin_edit_country().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Rejected);
        assert_eq!(session.mode(), EditMode::Browsing);
    }

    #[tokio::test]
    async fn drafts_are_mutually_exclusive() {
        let mut session = session().await;
        session.begin_add_country().unwrap();

        assert!(session.begin_add_language().is_err());
        assert!(session.cancel_language_edit().is_err());
        assert!(session.language_draft().is_none());
        assert_eq!(session.mode(), EditMode::AddingCountry);

        session.cancel_country_edit().unwrap();
        assert!(session.country_draft().is_none());
        assert_eq!(session.mode(), EditMode::Browsing);
    }
}
