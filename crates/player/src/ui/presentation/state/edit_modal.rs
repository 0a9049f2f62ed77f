//! Edit modal state
//!
//! Opening always fetches the record again instead of trusting the list copy.
//! Closing drops the form, so the next open starts from the fetched record.

use dunder_domain::{Character, CharacterId};

use super::character_form::CharacterForm;
use super::refresh::RefreshToggle;
use crate::application::ServiceError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditModal {
    #[default]
    Closed,
    /// Waiting for the fresh copy of this record
    Loading(CharacterId),
    Open(CharacterForm),
}

impl EditModal {
    pub fn is_visible(&self) -> bool {
        !matches!(self, EditModal::Closed)
    }

    /// Starts opening for `id`. The caller fetches it and feeds
    /// [`EditModal::apply_fetch`].
    pub fn open(&mut self, id: CharacterId) {
        *self = EditModal::Loading(id);
    }

    /// Results for a record the modal is no longer waiting on are ignored.
    pub fn apply_fetch(&mut self, id: &CharacterId, result: Result<Character, ServiceError>) {
        if !matches!(self, EditModal::Loading(pending) if pending == id) {
            return;
        }
        match result {
            Ok(character) => *self = EditModal::Open(CharacterForm::editing(character)),
            Err(e) => {
                tracing::warn!(character_id = %id, error = %e, "Could not load character for editing");
                *self = EditModal::Closed;
            }
        }
    }

    pub fn close(&mut self) {
        *self = EditModal::Closed;
    }

    /// Closes only when the backdrop itself was the click target.
    pub fn backdrop_click(&mut self, target_is_current_target: bool) {
        if target_is_current_target {
            self.close();
        }
    }

    pub fn form(&self) -> Option<&CharacterForm> {
        match self {
            EditModal::Open(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut CharacterForm> {
        match self {
            EditModal::Open(form) => Some(form),
            _ => None,
        }
    }

    /// Applies the result of an update submitted for `id`.
    ///
    /// A successful write always flips `toggle`, even when the modal was
    /// closed or moved on to another record while the request was in flight.
    /// Only a form still editing `id` is reset and closed.
    pub fn complete_submit(
        &mut self,
        id: &CharacterId,
        result: &Result<(), ServiceError>,
        toggle: &mut RefreshToggle,
    ) {
        let done = match self.form_mut() {
            Some(form) if form.editing_id() == Some(id) => form.complete(result, toggle),
            _ => {
                match result {
                    Ok(()) => {
                        tracing::debug!(character_id = %id, "Update finished after its form was closed");
                        toggle.flip();
                    }
                    Err(e) => {
                        tracing::warn!(character_id = %id, error = %e, "Update failed after its form was closed")
                    }
                }
                false
            }
        };
        if done {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dwight() -> Character {
        Character {
            id: CharacterId::numeric(7),
            nome: "Dwight".into(),
            descricao: "Assistant to the regional manager".into(),
            foto: None,
        }
    }

    fn opened() -> EditModal {
        let mut modal = EditModal::default();
        modal.open(CharacterId::numeric(7));
        modal.apply_fetch(&CharacterId::numeric(7), Ok(dwight()));
        modal
    }

    #[test]
    fn open_populates_from_fetched_record() {
        let modal = opened();
        let form = modal.form().unwrap();
        assert_eq!(form.name(), "Dwight");
        assert_eq!(form.editing_id(), Some(&CharacterId::numeric(7)));
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let mut modal = opened();
        modal.backdrop_click(false);
        assert!(modal.is_visible());

        modal.backdrop_click(true);
        assert_eq!(modal, EditModal::Closed);
        assert!(modal.form().is_none());
    }

    #[test]
    fn stale_fetch_after_close_is_ignored() {
        let mut modal = EditModal::default();
        modal.open(CharacterId::numeric(7));
        modal.close();
        modal.apply_fetch(&CharacterId::numeric(7), Ok(dwight()));
        assert_eq!(modal, EditModal::Closed);
    }

    #[test]
    fn failed_fetch_closes() {
        let mut modal = EditModal::default();
        modal.open(CharacterId::numeric(9));
        modal.apply_fetch(
            &CharacterId::numeric(9),
            Err(ServiceError::Server {
                status: 404,
                message: "Not Found".into(),
            }),
        );
        assert!(!modal.is_visible());
    }

    #[test]
    fn successful_submit_flips_refresh_and_closes() {
        let mut toggle = RefreshToggle::new();
        let mut modal = opened();

        let id = CharacterId::numeric(7);

        modal.complete_submit(&id, &Err(ServiceError::Network("offline".into())), &mut toggle);
        assert!(modal.is_visible());

        modal.complete_submit(&id, &Ok(()), &mut toggle);
        assert!(!modal.is_visible());
        assert_eq!(toggle.generation(), 1);
    }

    #[test]
    fn update_landing_after_close_still_refreshes() {
        let mut toggle = RefreshToggle::new();
        let mut modal = opened();
        modal.close();

        modal.complete_submit(&CharacterId::numeric(7), &Ok(()), &mut toggle);
        assert_eq!(toggle.generation(), 1);
        assert_eq!(modal, EditModal::Closed);
    }

    #[test]
    fn update_landing_after_reopen_leaves_the_new_form_alone() {
        let mut toggle = RefreshToggle::new();
        let mut modal = opened();

        modal.open(CharacterId::numeric(9));
        modal.apply_fetch(
            &CharacterId::numeric(9),
            Ok(Character {
                id: CharacterId::numeric(9),
                nome: "Pam".into(),
                descricao: "Receptionist".into(),
                foto: None,
            }),
        );
        modal.complete_submit(&CharacterId::numeric(7), &Ok(()), &mut toggle);

        assert_eq!(toggle.generation(), 1);
        let form = modal.form().unwrap();
        assert_eq!(form.editing_id(), Some(&CharacterId::numeric(9)));
        assert_eq!(form.name(), "Pam");
    }

    #[test]
    fn failed_update_after_close_does_not_refresh() {
        let mut toggle = RefreshToggle::new();
        let mut modal = opened();
        modal.close();

        modal.complete_submit(
            &CharacterId::numeric(7),
            &Err(ServiceError::Network("offline".into())),
            &mut toggle,
        );
        assert_eq!(toggle.generation(), 0);
    }
}
