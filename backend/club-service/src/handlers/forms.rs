/// Multipart form reading for the write/edit endpoints
///
/// The board and album forms arrive as multipart: text fields plus at most
/// one attached media file. This reads the whole payload into memory (the
/// 20MB guardrail keeps that honest) and hands handlers a flat view.
use std::collections::HashMap;

use actix_multipart::Multipart;
use futures_util::StreamExt;

use crate::error::{AppError, Result};

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// A file part of the form, as received.
pub struct UploadedFile {
    pub original_name: String,
    pub content_type: mime::Mime,
    pub bytes: Vec<u8>,
}

/// Parsed multipart form: named text fields and the optional file part.
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub file: Option<UploadedFile>,
}

impl MultipartForm {
    /// Required non-empty text field.
    pub fn text(&self, name: &str) -> Result<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("missing field: {}", name)))
    }

    /// Optional text field; empty submissions count as absent.
    pub fn optional_text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

pub async fn read_form(mut payload: Multipart) -> Result<MultipartForm> {
    let mut fields = HashMap::new();
    let mut file = None;
    let mut total_bytes = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|err| AppError::BadRequest(format!("malformed multipart payload: {}", err)))?;

        let disposition = field.content_disposition();
        let name = disposition.get_name().unwrap_or_default().to_string();
        let file_name = disposition
            .get_filename()
            .filter(|f| !f.is_empty())
            .map(|f| f.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|err| AppError::BadRequest(format!("broken upload stream: {}", err)))?;
            total_bytes += chunk.len();
            if total_bytes > MAX_UPLOAD_BYTES {
                return Err(AppError::BadRequest("upload exceeds the 20MB limit".into()));
            }
            bytes.extend_from_slice(&chunk);
        }

        match file_name {
            Some(original_name) => {
                let content_type = field
                    .content_type()
                    .cloned()
                    .unwrap_or(mime::APPLICATION_OCTET_STREAM);
                file = Some(UploadedFile {
                    original_name,
                    content_type,
                    bytes,
                });
            }
            None => {
                let value = String::from_utf8(bytes)
                    .map_err(|_| AppError::BadRequest(format!("field {} is not UTF-8", name)))?;
                fields.insert(name, value);
            }
        }
    }

    Ok(MultipartForm { fields, file })
}
