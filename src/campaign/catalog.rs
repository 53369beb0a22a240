//! Campaign type catalog.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single selectable campaign type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignTypeOption {
    /// Identifier sent to the campaign API.
    pub value: String,
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
}

impl CampaignTypeOption {
    pub fn new(
        value: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Reasons a catalog cannot be built.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("campaign catalog is empty")]
    Empty,

    #[error("duplicate campaign type: {0}")]
    DuplicateValue(String),

    #[error("campaign type at position {index} has a blank {field}")]
    BlankField { index: usize, field: &'static str },

    #[error("failed to read campaign catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse campaign catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Ordered, non-empty set of campaign types with unique values.
///
/// The catalog is immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignCatalog {
    options: Vec<CampaignTypeOption>,
}

impl CampaignCatalog {
    /// Build a catalog, rejecting empty lists, blank fields and duplicate values.
    pub fn new(options: Vec<CampaignTypeOption>) -> Result<Self, CatalogError> {
        if options.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            for (field, text) in [
                ("value", &option.value),
                ("title", &option.title),
                ("description", &option.description),
            ] {
                if text.trim().is_empty() {
                    return Err(CatalogError::BlankField { index, field });
                }
            }
            if !seen.insert(option.value.as_str()) {
                return Err(CatalogError::DuplicateValue(option.value.clone()));
            }
        }

        Ok(Self { options })
    }

    /// The six Poshmark campaign types Hoptub ships with.
    pub fn builtin() -> Self {
        Self {
            options: vec![
                CampaignTypeOption::new(
                    "shareCloset",
                    "Share Closet",
                    "Share your closet items to your followers",
                ),
                CampaignTypeOption::new(
                    "sendOffers",
                    "Send Offers",
                    "Send offers to likers of your closet items or to bundled items",
                ),
                CampaignTypeOption::new(
                    "followOthers",
                    "Follow Users",
                    "Follow other users's followers",
                ),
                CampaignTypeOption::new(
                    "findBuyers",
                    "Find Buyers",
                    "Find and follow users with search terms",
                ),
                CampaignTypeOption::new(
                    "findBrandLovers",
                    "Connect with Brand Fans",
                    "Find and follow users who are engaged with brand specific closet items",
                ),
                CampaignTypeOption::new(
                    "commentUsers",
                    "Comment Users",
                    "Write comments to the users's profile who interacted/purchased from your closet.",
                ),
            ],
        }
    }

    /// Parse a YAML list of `{value, title, description}` entries.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let options: Vec<CampaignTypeOption> = serde_yaml::from_str(source)?;
        Self::new(options)
    }

    /// Load a YAML catalog from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    pub fn options(&self) -> &[CampaignTypeOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; kept for the `len_without_is_empty` convention.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Look up an option by identifier.
    pub fn get(&self, value: &str) -> Option<&CampaignTypeOption> {
        self.options.iter().find(|o| o.value == value)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// The option selected when a wizard starts: the second entry, or the
    /// only entry of a single-option catalog.
    pub fn default_option(&self) -> &CampaignTypeOption {
        self.options.get(1).unwrap_or(&self.options[0])
    }
}

impl Default for CampaignCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = CampaignCatalog::builtin();
        let values: Vec<&str> = catalog.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "shareCloset",
                "sendOffers",
                "followOthers",
                "findBuyers",
                "findBrandLovers",
                "commentUsers"
            ]
        );
    }

    #[test]
    fn test_default_is_second_entry() {
        let catalog = CampaignCatalog::builtin();
        assert_eq!(catalog.default_option().title, "Send Offers");
    }

    #[test]
    fn test_default_single_entry() {
        let catalog =
            CampaignCatalog::new(vec![CampaignTypeOption::new("only", "Only", "The one")]).unwrap();
        assert_eq!(catalog.default_option().value, "only");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            CampaignCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = CampaignCatalog::new(vec![
            CampaignTypeOption::new("a", "A", "first"),
            CampaignTypeOption::new("a", "A again", "second"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateValue(v)) if v == "a"));
    }

    #[test]
    fn test_rejects_blank_title() {
        let result = CampaignCatalog::new(vec![CampaignTypeOption::new("a", "  ", "desc")]);
        assert!(matches!(
            result,
            Err(CatalogError::BlankField {
                index: 0,
                field: "title"
            })
        ));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r"
- value: shareCloset
  title: Share Closet
  description: Share your closet items
- value: bumpListings
  title: Bump Listings
  description: Relist stale items
";
        let catalog = CampaignCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("bumpListings"));
        assert_eq!(catalog.default_option().value, "bumpListings");
    }

    #[test]
    fn test_from_yaml_parse_error() {
        assert!(matches!(
            CampaignCatalog::from_yaml("value: [unterminated"),
            Err(CatalogError::Parse(_))
        ));
    }
}
