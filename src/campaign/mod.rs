//! Campaign types and the downstream campaign API.
//!
//! # Architecture
//!
//! - [`CampaignCatalog`]: the ordered set of campaign types a wizard offers
//! - [`CampaignGateway`]: where a chosen campaign type is sent
//! - [`SubmitError`]: the failures a gateway can report
//!
//! # Example
//!
//! ```rust
//! use hoptub_dashboard::campaign::CampaignCatalog;
//!
//! let catalog = CampaignCatalog::builtin();
//! assert_eq!(catalog.len(), 6);
//! assert_eq!(catalog.default_option().value, "sendOffers");
//! ```

mod catalog;
mod error;
mod gateway;

pub use catalog::{CampaignCatalog, CampaignTypeOption, CatalogError};
pub use error::{SubmitError, SubmitErrorKind};
pub use gateway::{CampaignGateway, CampaignTypeRequest, HttpGateway, PlaceholderGateway};
