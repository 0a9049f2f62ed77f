use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::{Blob, BlobPropertyBag, FormData};

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
        Self { config }
    }
}

fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Serialize(format!("{:?}", value))
}

/// Builds the browser `FormData` body. The browser sets the multipart
/// boundary header itself.
fn form_data(payload: &CharacterPayload) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in payload.text_parts() {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    if let Some(foto) = &payload.foto {
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(foto.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(&foto.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_error)?;
        form.append_with_blob_and_filename(FIELD_FOTO, &blob, &foto.file_name)
            .map_err(js_error)?;
    }
    Ok(form)
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(server_error(status, body, &status_text))
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn send_request(request: Request) -> Result<Response, ApiError> {
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

#[async_trait(?Send)]
impl CharacterApiPort for ApiAdapter {
    async fn list_characters(&self) -> Result<Vec<Character>, ApiError> {
        let response = send(Request::get(&self.config.characters_url())).await?;
        json(response).await
    }

    async fn get_character(&self, id: &CharacterId) -> Result<Character, ApiError> {
        let response = send(Request::get(&self.config.character_url(id))).await?;
        json(response).await
    }

    async fn create_character(&self, payload: &CharacterPayload) -> Result<(), ApiError> {
        let request = Request::post(&self.config.characters_url())
            .body(form_data(payload)?)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        send_request(request).await?;
        Ok(())
    }

    async fn update_character(
        &self,
        id: &CharacterId,
        payload: &CharacterPayload,
    ) -> Result<(), ApiError> {
        let request = Request::put(&self.config.character_url(id))
            .body(form_data(payload)?)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        send_request(request).await?;
        Ok(())
    }

    async fn delete_character(&self, id: &CharacterId) -> Result<(), ApiError> {
        send(Request::delete(&self.config.character_url(id))).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let request = Request::post(&self.config.url(LOGIN_PATH))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        let response = send_request(request).await?;
        json(response).await
    }

    async fn register_user(&self, request: &RegisterUserRequest) -> Result<(), ApiError> {
        let request = Request::post(&self.config.url(REGISTER_PATH))
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        send_request(request).await?;
        Ok(())
    }
}
