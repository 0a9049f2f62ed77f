//! Character Service - Application service for character management
//!
//! This service provides use case implementations for listing, creating,
//! updating, fetching and deleting characters. It abstracts away the HTTP
//! client details from the presentation layer.
//!
//! Every call goes straight to the network; failures are logged here and
//! handed back so the caller can decide between a no-op and an inline message.

use std::sync::Arc;

use dunder_domain::{Character, CharacterId, CharacterPayload};

use crate::application::ServiceError;
use crate::ports::outbound::CharacterApiPort;

/// A write the character form is about to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(CharacterPayload),
    Update {
        id: CharacterId,
        payload: CharacterPayload,
    },
}

impl Submission {
    pub fn payload(&self) -> &CharacterPayload {
        match self {
            Submission::Create(payload) => payload,
            Submission::Update { payload, .. } => payload,
        }
    }
}

/// Character service for managing characters
#[derive(Clone)]
pub struct CharacterService {
    api: Arc<dyn CharacterApiPort>,
}

impl CharacterService {
    /// Create a new CharacterService with the given API port
    pub fn new(api: Arc<dyn CharacterApiPort>) -> Self {
        Self { api }
    }

    /// List all characters, in the order the server returns them
    pub async fn list_characters(&self) -> Result<Vec<Character>, ServiceError> {
        match self.api.list_characters().await {
            Ok(characters) => {
                tracing::debug!(count = characters.len(), "Fetched characters");
                Ok(characters)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch characters");
                Err(e.into())
            }
        }
    }

    /// Get a single character by ID
    pub async fn get_character(&self, id: &CharacterId) -> Result<Character, ServiceError> {
        self.api.get_character(id).await.map_err(|e| {
            tracing::error!(character_id = %id, error = %e, "Failed to fetch character");
            e.into()
        })
    }

    /// Create a new character
    pub async fn create_character(&self, payload: &CharacterPayload) -> Result<(), ServiceError> {
        self.api.create_character(payload).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create character");
            ServiceError::from(e)
        })?;
        tracing::info!(
            nome = payload.fields.nome.as_deref().unwrap_or_default(),
            "Character created"
        );
        Ok(())
    }

    /// Update an existing character with the parts present in `payload`
    pub async fn update_character(
        &self,
        id: &CharacterId,
        payload: &CharacterPayload,
    ) -> Result<(), ServiceError> {
        self.api.update_character(id, payload).await.map_err(|e| {
            tracing::error!(character_id = %id, error = %e, "Failed to update character");
            ServiceError::from(e)
        })?;
        tracing::info!(character_id = %id, "Character updated");
        Ok(())
    }

    /// Delete a character
    pub async fn delete_character(&self, id: &CharacterId) -> Result<(), ServiceError> {
        self.api.delete_character(id).await.map_err(|e| {
            tracing::error!(character_id = %id, error = %e, "Failed to delete character");
            ServiceError::from(e)
        })?;
        tracing::info!(character_id = %id, "Character deleted");
        Ok(())
    }

    /// Perform a prepared form submission
    pub async fn submit(&self, submission: &Submission) -> Result<(), ServiceError> {
        match submission {
            Submission::Create(payload) => self.create_character(payload).await,
            Submission::Update { id, payload } => self.update_character(id, payload).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockCharacterApiPort};
    use dunder_domain::CharacterFields;

    fn dwight() -> Character {
        Character {
            id: CharacterId::numeric(7),
            nome: "Dwight".into(),
            descricao: "Assistant to the regional manager".into(),
            foto: Some("dwight.png".into()),
        }
    }

    #[tokio::test]
    async fn list_returns_server_order() {
        let mut api = MockCharacterApiPort::new();
        api.expect_list_characters().times(1).returning(|| {
            Ok(vec![
                Character {
                    id: CharacterId::numeric(9),
                    nome: "Pam".into(),
                    descricao: String::new(),
                    foto: None,
                },
                dwight(),
            ])
        });
        let service = CharacterService::new(Arc::new(api));

        let names: Vec<String> = service
            .list_characters()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.nome)
            .collect();
        assert_eq!(names, vec!["Pam", "Dwight"]);
    }

    #[tokio::test]
    async fn server_failure_surfaces_as_server_error() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character().times(1).returning(|_| {
            Err(ApiError::Server {
                status: 500,
                message: "boom".into(),
            })
        });
        let service = CharacterService::new(Arc::new(api));

        let err = service
            .get_character(&CharacterId::numeric(7))
            .await
            .unwrap_err();
        assert!(err.is_server());
    }

    #[tokio::test]
    async fn submit_dispatches_update_by_id() {
        let mut api = MockCharacterApiPort::new();
        api.expect_create_character().times(0);
        api.expect_update_character()
            .withf(|id, payload| {
                *id == CharacterId::numeric(7)
                    && payload.fields.descricao.as_deref() == Some("Regional manager")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let service = CharacterService::new(Arc::new(api));

        let submission = Submission::Update {
            id: CharacterId::numeric(7),
            payload: CharacterPayload::new(
                CharacterFields::new("Dwight", "Regional manager"),
                None,
            ),
        };
        service.submit(&submission).await.unwrap();
    }

    #[tokio::test]
    async fn delete_failure_is_not_retried() {
        let mut api = MockCharacterApiPort::new();
        api.expect_delete_character()
            .times(1)
            .returning(|_| Err(ApiError::Network("offline".into())));
        let service = CharacterService::new(Arc::new(api));

        let err = service
            .delete_character(&CharacterId::numeric(7))
            .await
            .unwrap_err();
        assert!(err.is_network());
    }
}
