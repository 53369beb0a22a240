//! In-memory store profiles.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::{FieldError, StoreForm};

/// Id of the store every fresh directory is seeded with.
pub const DEMO_STORE_ID: &str = "demo";

/// Editable profile of a connected sales channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

impl StoreProfile {
    /// Current values as form input.
    pub fn to_form(&self) -> StoreForm {
        StoreForm {
            name: self.name.clone(),
            username: self.username.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store not found: {0}")]
    NotFound(String),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
        }
    }
}

/// Thread-safe map of store profiles.
#[derive(Debug, Clone, Default)]
pub struct StoreDirectory {
    stores: Arc<RwLock<HashMap<String, StoreProfile>>>,
}

impl StoreDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the demo store.
    #[must_use]
    pub fn with_demo_store() -> Self {
        let directory = Self::new();
        directory.insert(StoreProfile {
            id: DEMO_STORE_ID.to_string(),
            name: "Hoptub Demo Closet".to_string(),
            username: "hoptub_demo".to_string(),
            description: "Sample closet used to try out campaigns.".to_string(),
            updated_at: Utc::now(),
        });
        directory
    }

    pub fn insert(&self, profile: StoreProfile) {
        self.stores
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(profile.id.clone(), profile);
    }

    pub fn get(&self, id: &str) -> Result<StoreProfile, StoreError> {
        self.stores
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Apply a submitted form.
    ///
    /// The outer result fails for unknown stores; the inner one carries the
    /// field errors when the presence checks fail, leaving the profile as is.
    pub fn update(
        &self,
        id: &str,
        form: &StoreForm,
    ) -> Result<Result<StoreProfile, Vec<FieldError>>, StoreError> {
        let mut guard = self.stores.write().unwrap_or_else(PoisonError::into_inner);
        let profile = guard
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let errors = form.validate();
        if !errors.is_empty() {
            return Ok(Err(errors));
        }

        profile.name = form.name.trim().to_string();
        profile.username = form.username.trim().to_string();
        profile.description = form.description.trim().to_string();
        profile.updated_at = Utc::now();
        Ok(Ok(profile.clone()))
    }
}
