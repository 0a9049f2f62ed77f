use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use dunder_domain::character::FIELD_FOTO;
use dunder_domain::{
    Character, CharacterId, CharacterPayload, LoginRequest, LoginResponse, RegisterUserRequest,
};

use super::{server_error, ApiAdapter};
use crate::application::config::{LOGIN_PATH, REGISTER_PATH};
use crate::application::ApiConfig;
use crate::ports::outbound::{ApiError, CharacterApiPort};

impl ApiAdapter {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn multipart(payload: &CharacterPayload) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in payload.text_parts() {
            form = form.text(name, value.to_string());
        }
        if let Some(foto) = &payload.foto {
            let part = Part::bytes(foto.bytes.clone())
                .file_name(foto.file_name.clone())
                .mime_str(&foto.content_type)
                .map_err(|e| ApiError::Serialize(e.to_string()))?;
            form = form.part(FIELD_FOTO, part);
        }
        Ok(form)
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let reason = status.canonical_reason().unwrap_or("Request failed");
    let body = response.text().await.unwrap_or_default();
    Err(server_error(status.as_u16(), body, reason))
}

async fn send(request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait]
impl CharacterApiPort for ApiAdapter {
    async fn list_characters(&self) -> Result<Vec<Character>, ApiError> {
        let response = send(self.client.get(self.config.characters_url())).await?;
        json(response).await
    }

    async fn get_character(&self, id: &CharacterId) -> Result<Character, ApiError> {
        let response = send(self.client.get(self.config.character_url(id))).await?;
        json(response).await
    }

    async fn create_character(&self, payload: &CharacterPayload) -> Result<(), ApiError> {
        let form = Self::multipart(payload)?;
        send(self.client.post(self.config.characters_url()).multipart(form)).await?;
        Ok(())
    }

    async fn update_character(
        &self,
        id: &CharacterId,
        payload: &CharacterPayload,
    ) -> Result<(), ApiError> {
        let form = Self::multipart(payload)?;
        send(self.client.put(self.config.character_url(id)).multipart(form)).await?;
        Ok(())
    }

    async fn delete_character(&self, id: &CharacterId) -> Result<(), ApiError> {
        send(self.client.delete(self.config.character_url(id))).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = send(self.client.post(self.config.url(LOGIN_PATH)).json(request)).await?;
        json(response).await
    }

    async fn register_user(&self, request: &RegisterUserRequest) -> Result<(), ApiError> {
        send(self.client.post(self.config.url(REGISTER_PATH)).json(request)).await?;
        Ok(())
    }
}
