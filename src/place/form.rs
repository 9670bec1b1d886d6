//! Form-field extractor for the place endpoints
//!
//! Accepts both `application/x-www-form-urlencoded` and `multipart/form-data`
//! bodies. File parts are acknowledged by filename only: their content is
//! skipped while the multipart stream advances and never buffered. Everything
//! that is buffered (the urlencoded body, multipart text fields) shares a cap
//! of [`MAX_TEXT_BYTES`].

use crate::error::{Error, Result};
use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use futures::StreamExt;
use std::collections::HashMap;

/// Upper bound on buffered form text per request
pub const MAX_TEXT_BYTES: usize = 2 * 1024 * 1024;

/// Text fields and upload filenames from a form body
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    text: HashMap<String, String>,
    uploads: HashMap<String, Option<String>>,
}

fn too_large(what: &str) -> Error {
    Error::PayloadTooLarge(format!("{} exceeds {} bytes", what, MAX_TEXT_BYTES))
}

impl FormFields {
    /// Build from already-decoded text fields
    pub fn from_text(text: HashMap<String, String>) -> Self {
        Self {
            text,
            uploads: HashMap::new(),
        }
    }

    /// Optional text field. An empty value counts as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.text
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Optional text field, or `""` when absent
    pub fn text_or_empty(&self, name: &str) -> &str {
        self.text(name).unwrap_or_default()
    }

    /// Required text field
    pub fn required(&self, name: &str) -> Result<&str> {
        self.text(name)
            .ok_or_else(|| Error::InvalidInput(format!("{}: field required", name)))
    }

    /// Required float field
    pub fn required_f64(&self, name: &str) -> Result<f64> {
        self.required(name)?
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidInput(format!("{}: value is not a valid float", name)))
    }

    /// Upload part by field name.
    ///
    /// `None` when the part was not sent; `Some(None)` when it was sent
    /// without a filename.
    pub fn upload(&self, name: &str) -> Option<Option<String>> {
        self.uploads.get(name).cloned()
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut fields = Self::default();
        let mut text_bytes = 0usize;

        while let Some(mut field) = multipart
            .next_field()
            .await
            .map_err(|e| Error::InvalidInput(format!("invalid multipart payload: {}", e)))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            let file_name = field.file_name().map(str::to_string);
            let has_content_type = field.content_type().is_some();

            match file_name {
                // Browsers send an empty filename for an unused file input
                Some(file_name) if file_name.is_empty() => continue,
                Some(file_name) => {
                    fields.uploads.insert(name, Some(file_name));
                }
                None if has_content_type => {
                    fields.uploads.insert(name, None);
                }
                None => {
                    let mut buf = Vec::new();
                    while let Some(chunk) = field.chunk().await.map_err(|e| {
                        Error::InvalidInput(format!("{}: invalid field: {}", name, e))
                    })? {
                        text_bytes += chunk.len();
                        if text_bytes > MAX_TEXT_BYTES {
                            return Err(too_large("form text"));
                        }
                        buf.extend_from_slice(&chunk);
                    }
                    let value = String::from_utf8(buf).map_err(|_| {
                        Error::InvalidInput(format!("{}: field is not valid UTF-8", name))
                    })?;
                    fields.text.insert(name, value);
                }
            }
        }

        Ok(fields)
    }
}

/// Buffer a body, failing once it passes [`MAX_TEXT_BYTES`]
async fn read_capped(body: Body) -> Result<Vec<u8>> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk =
            chunk.map_err(|e| Error::InvalidInput(format!("failed to read body: {}", e)))?;
        if buf.len() + chunk.len() > MAX_TEXT_BYTES {
            return Err(too_large("form body"));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| Error::InvalidInput(e.body_text()))?;
            Self::from_multipart(multipart).await
        } else {
            let (parts, body) = req.into_parts();
            let bytes = read_capped(body).await?;
            let req = Request::from_parts(parts, Body::from(bytes));
            let Form(text) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| Error::InvalidInput(e.body_text()))?;
            Ok(Self::from_text(text))
        }
    }
}
