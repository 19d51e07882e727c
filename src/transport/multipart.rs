use crate::errors::{ActionError, ActionResult};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};

/// A single multipart/form-data field
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        data: Bytes,
    },
}

impl MultipartField {
    pub fn name(&self) -> &str {
        match self {
            MultipartField::Text { name, .. } | MultipartField::File { name, .. } => name,
        }
    }
}

/// Builder for multipart/form-data requests
#[derive(Debug, Default)]
pub struct MultipartBuilder {
    fields: Vec<MultipartField>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file part to the multipart form
    pub fn add_file(mut self, field_name: &str, file_name: &str, data: Bytes) -> Self {
        self.fields.push(MultipartField::File {
            name: field_name.to_string(),
            file_name: file_name.to_string(),
            content_type: mime::APPLICATION_OCTET_STREAM.to_string(),
            data,
        });
        self
    }

    /// Adds a text part to the multipart form
    pub fn add_text(mut self, field_name: &str, value: &str) -> Self {
        self.fields.push(MultipartField::Text {
            name: field_name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn build(self) -> Vec<MultipartField> {
        self.fields
    }

    /// Converts recorded fields into a reqwest form
    pub(crate) fn into_form(fields: Vec<MultipartField>) -> ActionResult<Form> {
        let mut form = Form::new();
        for field in fields {
            form = match field {
                MultipartField::Text { name, value } => form.text(name, value),
                MultipartField::File {
                    name,
                    file_name,
                    content_type,
                    data,
                } => {
                    let part = Part::bytes(data.to_vec())
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(|e| {
                            ActionError::Serialization(format!("Failed to set MIME type: {}", e))
                        })?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
