//! Request bodies: JSON, or multipart when any file is attached.
//!
//! DESIGN
//! ======
//! Forms describe their fields once as a [`FormPayload`]. [`Payload::from_form`]
//! decides the encoding, so no screen has to branch on whether the user
//! picked a file. Only the browser build turns a payload into `FormData`.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde_json::{Map, Value};

use crate::util::files::PickedFile;

#[derive(Clone, Debug, PartialEq)]
pub enum FormValue {
    Value(Value),
    File(PickedFile),
}

/// Ordered form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormPayload {
    pub fields: Vec<(String, FormValue)>,
}

impl FormPayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), FormValue::Value(value.into())));
        self
    }

    /// Add `value` only when present; absent parents are simply omitted.
    #[must_use]
    pub fn optional(self, name: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.value(name, value),
            None => self,
        }
    }

    #[must_use]
    pub fn file(mut self, name: impl Into<String>, file: Option<PickedFile>) -> Self {
        if let Some(file) = file {
            self.fields.push((name.into(), FormValue::File(file)));
        }
        self
    }

    #[must_use]
    pub fn has_files(&self) -> bool {
        self.fields.iter().any(|(_, v)| matches!(v, FormValue::File(_)))
    }

    /// Attached files, for release after the request completes.
    #[must_use]
    pub fn files(&self) -> Vec<PickedFile> {
        self.fields
            .iter()
            .filter_map(|(_, v)| match v {
                FormValue::File(file) => Some(file.clone()),
                FormValue::Value(_) => None,
            })
            .collect()
    }

    /// Plain fields as a JSON object (files skipped).
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .filter_map(|(name, v)| match v {
                FormValue::Value(value) => Some((name.clone(), value.clone())),
                FormValue::File(_) => None,
            })
            .collect();
        Value::Object(map)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    Multipart(FormPayload),
}

impl Payload {
    /// Multipart when any file is attached, JSON otherwise.
    #[must_use]
    pub fn from_form(form: FormPayload) -> Self {
        if form.has_files() { Self::Multipart(form) } else { Self::Json(form.to_json()) }
    }

    #[must_use]
    pub fn files(&self) -> Vec<PickedFile> {
        match self {
            Self::Json(_) => Vec::new(),
            Self::Multipart(form) => form.files(),
        }
    }
}

/// Text sent for a non-file multipart field.
#[must_use]
pub fn multipart_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Encode `form` as browser `FormData`.
///
/// # Errors
///
/// Returns a message when a referenced file is no longer registered or
/// the browser rejects a field.
#[cfg(feature = "hydrate")]
pub fn to_form_data(form: &FormPayload) -> Result<web_sys::FormData, String> {
    let data = web_sys::FormData::new().map_err(|_| "could not create form data".to_owned())?;
    for (name, value) in &form.fields {
        match value {
            FormValue::Value(value) => {
                if let Some(text) = multipart_text(value) {
                    data.append_with_str(name, &text)
                        .map_err(|_| format!("could not encode field {name}"))?;
                }
            }
            FormValue::File(picked) => {
                crate::util::files::with_file(picked, |file| {
                    data.append_with_blob_and_filename(name, file, &file.name())
                })
                .ok_or_else(|| format!("{} is no longer available; choose it again", picked.meta.name))?
                .map_err(|_| format!("could not attach {}", picked.meta.name))?;
            }
        }
    }
    Ok(data)
}
