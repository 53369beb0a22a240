//! Sales-channel stores and their edit form.
//!
//! - [`StoreProfile`]: the editable fields of a connected store
//! - [`StoreDirectory`]: in-memory profiles keyed by store id
//! - [`StoreForm`]: submitted form values and their presence checks

mod directory;
mod form;

pub use directory::{DEMO_STORE_ID, StoreDirectory, StoreError, StoreProfile};
pub use form::{FieldError, StoreForm};
