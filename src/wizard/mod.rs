//! Campaign creation wizard.
//!
//! The first wizard step picks a campaign type. Its state is kept
//! server-side in a [`WizardStore`] so every render reflects the current
//! selection and submission status.
//!
//! # Architecture
//!
//! - [`StepState`]: selected campaign type plus [`SubmissionStatus`]
//! - [`WizardStore`]: thread-safe store for all active wizards
//! - [`CampaignTypeStep`]: the step's catalog, navigation and submit driver
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use hoptub_dashboard::campaign::CampaignCatalog;
//! use hoptub_dashboard::wizard::WizardStore;
//!
//! let store = WizardStore::new(Arc::new(CampaignCatalog::builtin()));
//! let id = store.create();
//! store.select(&id, "shareCloset").unwrap();
//!
//! assert_eq!(store.get(&id).unwrap().selected(), "shareCloset");
//! ```

mod error;
mod state;
mod step;
mod store;

pub use error::WizardError;
pub use state::{StepState, SubmissionStatus};
pub use step::{CampaignTypeStep, NavTarget, StepNavigation, SubmitOutcome};
pub use store::{DEFAULT_WIZARD_TIMEOUT, WizardStore};
