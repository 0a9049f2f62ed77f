//! Character records and the write payloads built from them

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// Multipart field name for the character name
pub const FIELD_NOME: &str = "nome";
/// Multipart field name for the character description
pub const FIELD_DESCRICAO: &str = "descricao";
/// Multipart field name for the character photo
pub const FIELD_FOTO: &str = "foto";

/// A character record as the server returns it
///
/// The server owns this record. The client keeps disposable copies of it
/// and never merges them; a fresh fetch replaces whatever was held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    /// Stored image file name, resolved against `{base}/uploads/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto: Option<String>,
}

/// Image picked by the user, sent as the `foto` multipart part
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Builds an upload, guessing the MIME type from the file extension.
    pub fn from_file_name(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Text fields of a create/update request
///
/// `None` means "not sent". An update only touches the fields present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFields {
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

impl CharacterFields {
    pub fn new(nome: impl Into<String>, descricao: impl Into<String>) -> Self {
        Self {
            nome: Some(nome.into()),
            descricao: Some(descricao.into()),
        }
    }
}

/// Full multipart payload: text fields plus an optional replacement image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPayload {
    pub fields: CharacterFields,
    pub foto: Option<ImageUpload>,
}

impl CharacterPayload {
    pub fn new(fields: CharacterFields, foto: Option<ImageUpload>) -> Self {
        Self { fields, foto }
    }

    /// Text parts in wire order, skipping fields that are not set.
    pub fn text_parts(&self) -> Vec<(&'static str, &str)> {
        let mut parts = Vec::with_capacity(2);
        if let Some(nome) = self.fields.nome.as_deref() {
            parts.push((FIELD_NOME, nome));
        }
        if let Some(descricao) = self.fields.descricao.as_deref() {
            parts.push((FIELD_DESCRICAO, descricao));
        }
        parts
    }

    pub fn is_empty(&self) -> bool {
        self.fields.nome.is_none() && self.fields.descricao.is_none() && self.foto.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_record() {
        let json = r#"{"id":7,"nome":"Dwight","descricao":"Assistant to the regional manager","foto":"dwight.png"}"#;
        let character: Character = serde_json::from_str(json).unwrap();

        assert_eq!(character.id, CharacterId::numeric(7));
        assert_eq!(character.nome, "Dwight");
        assert_eq!(character.foto.as_deref(), Some("dwight.png"));
    }

    #[test]
    fn tolerates_missing_photo_and_description() {
        let character: Character = serde_json::from_str(r#"{"id":"a1","nome":"Jim"}"#).unwrap();
        assert_eq!(character.descricao, "");
        assert_eq!(character.foto, None);
    }

    #[test]
    fn text_parts_skip_unset_fields() {
        let payload = CharacterPayload::new(
            CharacterFields {
                nome: None,
                descricao: Some("Regional manager".into()),
            },
            None,
        );
        assert_eq!(payload.text_parts(), vec![("descricao", "Regional manager")]);
        assert!(!payload.is_empty());
        assert!(CharacterPayload::default().is_empty());
    }

    #[test]
    fn guesses_image_mime_type() {
        assert_eq!(
            ImageUpload::from_file_name("Michael.JPG", vec![1]).content_type,
            "image/jpeg"
        );
        assert_eq!(
            ImageUpload::from_file_name("noext", vec![]).content_type,
            "application/octet-stream"
        );
    }
}
