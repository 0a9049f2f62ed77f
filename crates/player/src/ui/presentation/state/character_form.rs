//! Dual-mode character form state
//!
//! The same form creates a new record or edits an existing one. The mode is
//! an explicit variant so the submit path never has to probe for a target.
//!
//! Update policy: every populated field is resent on update. There is no
//! dirty tracking, so an unchanged name still goes out with a changed
//! description.

use dunder_domain::{
    remaining_chars, validate_description, Character, CharacterFields, CharacterId,
    CharacterPayload, ImageUpload, ValidationError,
};

use super::refresh::RefreshToggle;
use crate::application::services::Submission;
use crate::application::ServiceError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(Character),
}

/// One user edit coming from the form inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Name(String),
    Description(String),
    Image(Option<ImageUpload>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterForm {
    mode: FormMode,
    name: String,
    description: String,
    image: Option<ImageUpload>,
    /// Bumped whenever the native file picker must be emptied
    file_selection: u64,
}

impl CharacterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form already editing `character`
    pub fn editing(character: Character) -> Self {
        let mut form = Self::new();
        form.begin_edit(character);
        form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    pub fn editing_id(&self) -> Option<&CharacterId> {
        match &self.mode {
            FormMode::Creating => None,
            FormMode::Editing(character) => Some(&character.id),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    pub fn file_selection(&self) -> u64 {
        self.file_selection
    }

    pub fn remaining_chars(&self) -> usize {
        remaining_chars(&self.description)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Accepts a new description value from the input.
    ///
    /// A value over the cap is dropped whole and the stored description stays
    /// as it was; nothing is truncated.
    pub fn input_description(&mut self, value: &str) -> Result<(), ValidationError> {
        validate_description(value)?;
        self.description = value.to_string();
        Ok(())
    }

    pub fn select_image(&mut self, image: Option<ImageUpload>) {
        self.image = image;
    }

    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Name(name) => self.set_name(name),
            FormEdit::Description(value) => {
                if let Err(e) = self.input_description(&value) {
                    tracing::debug!(error = %e, "Description input rejected");
                }
            }
            FormEdit::Image(image) => self.select_image(image),
        }
    }

    /// Drops the picked image and asks the view for a fresh, empty picker.
    pub fn clear_file_selection(&mut self) {
        self.image = None;
        self.file_selection = self.file_selection.wrapping_add(1);
    }

    /// Loads `character` into the form. The current photo stays on the
    /// server unless a new image is picked.
    pub fn begin_edit(&mut self, character: Character) {
        self.name = character.nome.clone();
        self.description = character.descricao.clone();
        self.clear_file_selection();
        self.mode = FormMode::Editing(character);
    }

    /// Leaves edit mode with a blank form.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.mode = FormMode::Creating;
        self.name.clear();
        self.description.clear();
        self.clear_file_selection();
    }

    fn populated(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Builds the write for the current mode without touching form state.
    pub fn prepare(&self) -> Result<Submission, ValidationError> {
        validate_description(&self.description)?;
        let fields = CharacterFields {
            nome: Self::populated(&self.name),
            descricao: Self::populated(&self.description),
        };
        let payload = CharacterPayload::new(fields, self.image.clone());

        match &self.mode {
            FormMode::Creating => {
                if payload.fields.nome.is_none() {
                    return Err(ValidationError::NameRequired);
                }
                if payload.fields.descricao.is_none() {
                    return Err(ValidationError::DescriptionRequired);
                }
                Ok(Submission::Create(payload))
            }
            FormMode::Editing(character) => {
                if payload.is_empty() {
                    return Err(ValidationError::NameRequired);
                }
                Ok(Submission::Update {
                    id: character.id.clone(),
                    payload,
                })
            }
        }
    }

    /// Applies the outcome of a submit.
    ///
    /// On success the form goes back to a blank create form and the list is
    /// asked to reload. On failure the input is left intact for a retry.
    /// Returns whether the submit succeeded.
    pub fn complete(
        &mut self,
        result: &Result<(), ServiceError>,
        toggle: &mut RefreshToggle,
    ) -> bool {
        match result {
            Ok(()) => {
                self.reset();
                toggle.flip();
                true
            }
            Err(e) => {
                tracing::error!(
                    character_id = ?self.editing_id().map(ToString::to_string),
                    error = %e,
                    "Character submit failed; keeping form input"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::services::CharacterService;
    use crate::ports::outbound::MockCharacterApiPort;
    use dunder_domain::MAX_DESCRIPTION_CHARS;

    fn dwight() -> Character {
        Character {
            id: CharacterId::numeric(7),
            nome: "Dwight".into(),
            descricao: "Assistant to the regional manager".into(),
            foto: Some("dwight.png".into()),
        }
    }

    #[test]
    fn description_over_the_cap_is_rejected() {
        let mut form = CharacterForm::new();
        let full = "a".repeat(MAX_DESCRIPTION_CHARS);
        form.input_description(&full).unwrap();
        assert_eq!(form.remaining_chars(), 0);

        let longer = format!("{full}b");
        assert!(form.input_description(&longer).is_err());
        assert_eq!(form.description(), full);
        assert_eq!(form.remaining_chars(), 0);
    }

    #[test]
    fn applied_edits_respect_the_cap() {
        let mut form = CharacterForm::new();
        form.apply(FormEdit::Name("Jim".into()));
        form.apply(FormEdit::Description("Sells paper".into()));
        form.apply(FormEdit::Description("x".repeat(MAX_DESCRIPTION_CHARS + 1)));
        assert_eq!(form.name(), "Jim");
        assert_eq!(form.description(), "Sells paper");
    }

    #[test]
    fn remaining_count_tracks_length() {
        let mut form = CharacterForm::new();
        assert_eq!(form.remaining_chars(), 500);
        form.input_description("Sells paper").unwrap();
        assert_eq!(form.remaining_chars(), 489);
    }

    #[tokio::test]
    async fn create_sends_only_text_fields_and_resets() {
        let mut api = MockCharacterApiPort::new();
        api.expect_create_character()
            .withf(|payload| {
                payload.fields.nome.as_deref() == Some("Jim")
                    && payload.fields.descricao.as_deref() == Some("Sells paper")
                    && payload.foto.is_none()
            })
            .times(1)
            .returning(|_| Ok(()));
        let service = CharacterService::new(Arc::new(api));

        let mut toggle = RefreshToggle::new();
        let mut form = CharacterForm::new();
        form.set_name("Jim");
        form.input_description("Sells paper").unwrap();
        let picker = form.file_selection();

        let submission = form.prepare().unwrap();
        assert!(matches!(submission, Submission::Create(_)));
        let result = service.submit(&submission).await;

        assert!(form.complete(&result, &mut toggle));
        assert_eq!(form.mode(), &FormMode::Creating);
        assert_eq!(form.name(), "");
        assert_eq!(form.description(), "");
        assert_ne!(form.file_selection(), picker);
        assert_eq!(toggle.generation(), 1);
    }

    #[tokio::test]
    async fn edit_resends_all_populated_fields() {
        let mut api = MockCharacterApiPort::new();
        api.expect_update_character()
            .withf(|id, payload| {
                *id == CharacterId::numeric(7)
                    && payload.fields.nome.as_deref() == Some("Dwight")
                    && payload.fields.descricao.as_deref() == Some("Regional manager")
                    && payload.foto.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let service = CharacterService::new(Arc::new(api));

        let mut toggle = RefreshToggle::new();
        let mut form = CharacterForm::new();
        form.begin_edit(dwight());
        assert_eq!(form.name(), "Dwight");
        assert_eq!(form.description(), "Assistant to the regional manager");

        form.input_description("Regional manager").unwrap();
        let submission = form.prepare().unwrap();
        let result = service.submit(&submission).await;

        assert!(form.complete(&result, &mut toggle));
        assert!(!form.is_editing());
    }

    #[test]
    fn failed_submit_keeps_input_and_does_not_refresh() {
        let mut toggle = RefreshToggle::new();
        let mut form = CharacterForm::editing(dwight());
        form.set_name("Dwight K. Schrute");

        let result = Err(ServiceError::Network("offline".into()));
        assert!(!form.complete(&result, &mut toggle));
        assert_eq!(form.name(), "Dwight K. Schrute");
        assert_eq!(form.editing_id(), Some(&CharacterId::numeric(7)));
        assert_eq!(toggle.generation(), 0);
    }

    #[test]
    fn create_requires_name_and_description() {
        let mut form = CharacterForm::new();
        assert_eq!(form.prepare(), Err(ValidationError::NameRequired));
        form.set_name("Jim");
        assert_eq!(form.prepare(), Err(ValidationError::DescriptionRequired));
    }

    #[test]
    fn edit_omits_blank_fields() {
        let mut form = CharacterForm::editing(dwight());
        form.set_name("  ");
        match form.prepare().unwrap() {
            Submission::Update { payload, .. } => {
                assert_eq!(payload.fields.nome, None);
                assert_eq!(
                    payload.fields.descricao.as_deref(),
                    Some("Assistant to the regional manager")
                );
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn picked_image_goes_into_the_payload() {
        let mut form = CharacterForm::new();
        form.set_name("Pam");
        form.input_description("Receptionist").unwrap();
        form.select_image(Some(ImageUpload::from_file_name("pam.png", vec![1, 2, 3])));

        let submission = form.prepare().unwrap();
        let foto = submission.payload().foto.as_ref().unwrap();
        assert_eq!(foto.file_name, "pam.png");

        form.clear_file_selection();
        assert!(form.image().is_none());
    }
}
