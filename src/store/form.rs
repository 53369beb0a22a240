//! Store edit form values.

use serde::{Deserialize, Serialize};

/// A form field that failed its presence check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Values posted by the store edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub description: String,
}

impl StoreForm {
    /// Presence checks on the required fields. Values are trimmed first.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Store name is required",
            });
        }
        if self.username.trim().is_empty() {
            errors.push(FieldError {
                field: "username",
                message: "Poshmark username is required",
            });
        }
        errors
    }

    /// Message for one field, if it failed.
    pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
        errors.iter().find(|e| e.field == field).map(|e| e.message)
    }
}
