//! Character list view state
//!
//! The list never patches itself. Every change on the server is followed by a
//! full re-fetch, and a fetch result replaces whatever was shown.

use dunder_domain::{Character, CharacterId};

use super::refresh::RefreshToggle;
use crate::application::ServiceError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterListState {
    characters: Vec<Character>,
    /// Refresh generation the last fetch was started for
    requested: Option<u64>,
}

impl CharacterListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters in server order
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// True on mount and after every refresh flip not yet fetched for.
    pub fn needs_reload(&self, toggle: &RefreshToggle) -> bool {
        self.requested != Some(toggle.generation())
    }

    /// Claims the fetch for the current generation.
    ///
    /// Returns false when a fetch for this generation was already started, so
    /// re-renders between a flip and its result do not issue duplicate calls.
    pub fn begin_reload(&mut self, toggle: &RefreshToggle) -> bool {
        if !self.needs_reload(toggle) {
            return false;
        }
        self.requested = Some(toggle.generation());
        true
    }

    /// Applies the result of the fetch started for `generation`.
    ///
    /// Results from a fetch that was superseded by a later `begin_reload` are
    /// dropped, so an out-of-order response cannot replace newer data. A
    /// failed fetch keeps the previous list on screen.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<Character>, ServiceError>) {
        if self.requested != Some(generation) {
            tracing::debug!(generation, "Dropping superseded character list fetch");
            return;
        }
        match result {
            Ok(characters) => self.characters = characters,
            Err(e) => tracing::warn!(error = %e, "Keeping stale character list"),
        }
    }

    /// Handles the result of a delete. Success requests a re-fetch instead of
    /// removing the row locally.
    pub fn apply_delete(
        &mut self,
        id: &CharacterId,
        result: Result<(), ServiceError>,
        toggle: &mut RefreshToggle,
    ) {
        match result {
            Ok(()) => toggle.flip(),
            Err(e) => {
                tracing::warn!(character_id = %id, error = %e, "Delete failed; list unchanged")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::services::CharacterService;
    use crate::ports::outbound::{ApiError, MockCharacterApiPort};
    use dunder_domain::{CharacterFields, CharacterPayload};

    fn character(id: i64, nome: &str) -> Character {
        Character {
            id: CharacterId::numeric(id),
            nome: nome.into(),
            descricao: String::new(),
            foto: None,
        }
    }

    async fn sync(list: &mut CharacterListState, toggle: &RefreshToggle, service: &CharacterService) {
        if list.begin_reload(toggle) {
            list.apply_fetch(toggle.generation(), service.list_characters().await);
        }
    }

    #[tokio::test]
    async fn refetches_exactly_once_per_successful_write() {
        let mut api = MockCharacterApiPort::new();
        let mut calls = 0;
        // mount + create + delete; the failed update adds nothing
        api.expect_list_characters().times(3).returning(move || {
            calls += 1;
            Ok(match calls {
                1 => vec![character(7, "Dwight")],
                2 => vec![character(7, "Dwight"), character(8, "Jim")],
                _ => vec![character(8, "Jim")],
            })
        });
        api.expect_create_character().times(1).returning(|_| Ok(()));
        api.expect_update_character().times(1).returning(|_, _| {
            Err(ApiError::Server {
                status: 500,
                message: "nope".into(),
            })
        });
        api.expect_delete_character().times(1).returning(|_| Ok(()));
        let service = CharacterService::new(Arc::new(api));

        let mut toggle = RefreshToggle::new();
        let mut list = CharacterListState::new();
        sync(&mut list, &toggle, &service).await;
        sync(&mut list, &toggle, &service).await;
        assert_eq!(list.characters().len(), 1);

        let payload = CharacterPayload::new(CharacterFields::new("Jim", "Sells paper"), None);
        if service.create_character(&payload).await.is_ok() {
            toggle.flip();
        }
        sync(&mut list, &toggle, &service).await;
        assert_eq!(list.characters().len(), 2);

        if service
            .update_character(&CharacterId::numeric(8), &payload)
            .await
            .is_ok()
        {
            toggle.flip();
        }
        sync(&mut list, &toggle, &service).await;

        let id = CharacterId::numeric(7);
        let result = service.delete_character(&id).await;
        list.apply_delete(&id, result, &mut toggle);
        sync(&mut list, &toggle, &service).await;

        let names: Vec<&str> = list.characters().iter().map(|c| c.nome.as_str()).collect();
        assert_eq!(names, vec!["Jim"]);
    }

    #[test]
    fn failed_fetch_keeps_previous_list() {
        let toggle = RefreshToggle::new();
        let mut list = CharacterListState::new();
        assert!(list.begin_reload(&toggle));
        list.apply_fetch(toggle.generation(), Ok(vec![character(7, "Dwight")]));
        list.apply_fetch(toggle.generation(), Err(ServiceError::Network("offline".into())));
        assert_eq!(list.characters(), &[character(7, "Dwight")]);
    }

    #[test]
    fn superseded_fetch_cannot_overwrite_newer_list() {
        let mut toggle = RefreshToggle::new();
        let mut list = CharacterListState::new();

        assert!(list.begin_reload(&toggle));
        let mount = toggle.generation();
        toggle.flip();
        assert!(list.begin_reload(&toggle));
        let after_delete = toggle.generation();

        list.apply_fetch(after_delete, Ok(vec![character(8, "Jim")]));
        list.apply_fetch(mount, Ok(vec![character(7, "Dwight"), character(8, "Jim")]));

        let names: Vec<&str> = list.characters().iter().map(|c| c.nome.as_str()).collect();
        assert_eq!(names, vec!["Jim"]);
    }

    #[test]
    fn superseded_fetch_arriving_first_is_dropped_too() {
        let mut toggle = RefreshToggle::new();
        let mut list = CharacterListState::new();

        assert!(list.begin_reload(&toggle));
        let mount = toggle.generation();
        toggle.flip();
        assert!(list.begin_reload(&toggle));

        list.apply_fetch(mount, Ok(vec![character(7, "Dwight")]));
        assert!(list.characters().is_empty());

        list.apply_fetch(toggle.generation(), Ok(vec![character(8, "Jim")]));
        assert_eq!(list.characters(), &[character(8, "Jim")]);
    }

    #[test]
    fn failed_delete_does_not_request_reload() {
        let mut toggle = RefreshToggle::new();
        let mut list = CharacterListState::new();
        assert!(list.begin_reload(&toggle));

        list.apply_delete(
            &CharacterId::numeric(7),
            Err(ServiceError::Network("offline".into())),
            &mut toggle,
        );
        assert!(!list.needs_reload(&toggle));
    }
}
