//! Collection of `multipart/form-data` bodies.

use std::collections::HashMap;
use std::str::FromStr;

use axum::extract::Multipart;

use crate::domain::types::PhotoUpload;
use crate::error::WorkOrdersError;

/// A fully read multipart body: text fields by name, file parts in arrival order.
///
/// Blank text fields and empty file parts are treated as absent, which is what
/// browsers send for untouched inputs.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: Vec<(String, PhotoUpload)>,
}

impl FormData {
    pub async fn read(mut multipart: Multipart) -> Result<Self, WorkOrdersError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(|e| {
            tracing::debug!(error = %e, "malformed multipart body");
            WorkOrdersError::MissingData
        })? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let bytes = field.bytes().await.map_err(|e| {
                        tracing::debug!(error = %e, field = %name, "unreadable file part");
                        WorkOrdersError::MissingData
                    })?;
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.files.push((name, PhotoUpload { file_name, bytes }));
                }
                None => {
                    let text = field.text().await.map_err(|e| {
                        tracing::debug!(error = %e, field = %name, "unreadable text part");
                        WorkOrdersError::MissingData
                    })?;
                    form.insert_text(name, text);
                }
            }
        }
        Ok(form)
    }

    fn insert_text(&mut self, name: String, value: String) {
        if !value.trim().is_empty() {
            self.fields.insert(name, value);
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn required(&self, name: &str) -> Result<&str, WorkOrdersError> {
        self.text(name).ok_or(WorkOrdersError::MissingData)
    }

    /// Parse an optional field; a present but unparsable value is an error.
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, WorkOrdersError> {
        self.text(name)
            .map(|v| v.trim().parse().map_err(|_| WorkOrdersError::MissingData))
            .transpose()
    }

    /// First file part named `name`.
    pub fn take_file(&mut self, name: &str) -> Option<PhotoUpload> {
        let idx = self.files.iter().position(|(n, _)| n == name)?;
        Some(self.files.remove(idx).1)
    }

    /// All file parts named `name`, in arrival order.
    pub fn take_files(&mut self, name: &str) -> Vec<PhotoUpload> {
        let (taken, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.files)
            .into_iter()
            .partition(|(n, _)| n == name);
        self.files = rest;
        taken.into_iter().map(|(_, upload)| upload).collect()
    }
}
