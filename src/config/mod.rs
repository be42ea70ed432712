//! Paginator configuration: defaults, JSON loading and validation

mod error;

use serde::{Deserialize, Serialize};

pub use error::{
    ConfigurationError, CONTEXT_SIZE_WARNING, ITEMS_PER_PAGE_WARNING, MALFORMED_WARNING,
    TOO_MANY_PAGES_WARNING, TOTAL_ITEMS_WARNING,
};

/// Largest page count accepted; page numbers cross the WASM bridge as `u32`
pub const MAX_TOTAL_PAGES: u64 = u32::MAX as u64;

/// Default label of the "previous page" control
pub const DEFAULT_PREV_TEXT: &str = "Prev";
/// Default label of the "next page" control
pub const DEFAULT_NEXT_TEXT: &str = "Next";

/// Configuration supplied once when the paginator is created.
///
/// Integers are signed so that bad host input reaches validation and is
/// reported through [`ConfigurationError`] instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginatorConfig {
    /// How many data items belong to one page
    pub items_per_page: i64,
    /// Total number of data items
    pub total_items: i64,
    /// Pages kept visible before and after the active page (-1 shows anchors only)
    pub context_size: i64,
    /// Label of the "previous page" control, passed through untouched
    pub prev_text: String,
    /// Label of the "next page" control, passed through untouched
    pub next_text: String,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            items_per_page: 1,
            total_items: 0,
            context_size: 0,
            prev_text: DEFAULT_PREV_TEXT.to_string(),
            next_text: DEFAULT_NEXT_TEXT.to_string(),
        }
    }
}

impl PaginatorConfig {
    /// Create a configuration with the default labels
    pub fn new(items_per_page: i64, total_items: i64, context_size: i64) -> Self {
        Self {
            items_per_page,
            total_items,
            context_size,
            ..Self::default()
        }
    }

    /// Replace the prev/next labels
    pub fn with_labels(
        mut self,
        prev_text: impl Into<String>,
        next_text: impl Into<String>,
    ) -> Self {
        self.prev_text = prev_text.into();
        self.next_text = next_text.into();
        self
    }

    /// Parse a camelCase JSON object; missing keys take their defaults.
    ///
    /// Only parses, call [`validate`](Self::validate) before use.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the documented bounds.
    ///
    /// Both `contextSize` and `itemsPerPage` are bounded by the raw item
    /// count, not by the derived page count.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.total_items < 0 {
            return Err(ConfigurationError::NegativeTotalItems {
                value: self.total_items,
            });
        }

        if self.context_size < -1 || self.context_size > self.total_items {
            return Err(ConfigurationError::InvalidContextSize {
                value: self.context_size,
                max: self.total_items,
            });
        }

        // Also rejects every page size for an empty data set
        if self.items_per_page < 1 || self.items_per_page > self.total_items {
            return Err(ConfigurationError::InvalidItemsPerPage {
                value: self.items_per_page,
                max: self.total_items,
            });
        }

        let pages = self.page_count();
        if pages > MAX_TOTAL_PAGES {
            return Err(ConfigurationError::TooManyPages {
                pages,
                max: MAX_TOTAL_PAGES,
            });
        }

        Ok(())
    }

    /// Number of pages, never less than one. Assumes a validated configuration.
    pub fn total_pages(&self) -> usize {
        usize::try_from(self.page_count()).unwrap_or(usize::MAX)
    }

    fn page_count(&self) -> u64 {
        let items = self.total_items.max(0) as u64;
        let per_page = self.items_per_page.max(1) as u64;
        items.div_ceil(per_page).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaginatorConfig::default();
        assert_eq!(config.items_per_page, 1);
        assert_eq!(config.total_items, 0);
        assert_eq!(config.context_size, 0);
        assert_eq!(config.prev_text, "Prev");
        assert_eq!(config.next_text, "Next");
        // No data yet: rejected until the host supplies an item count
        assert_eq!(config.validate().unwrap_err().field(), Some("itemsPerPage"));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginatorConfig::new(3, 10, 0).total_pages(), 4);
        assert_eq!(PaginatorConfig::new(5, 10, 0).total_pages(), 2);
        assert_eq!(PaginatorConfig::new(1, 9, 0).total_pages(), 9);
        assert_eq!(PaginatorConfig::new(10, 10, 0).total_pages(), 1);
    }

    #[test]
    fn test_rejects_zero_items_per_page() {
        let err = PaginatorConfig::new(0, 10, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidItemsPerPage { value: 0, max: 10 }
        ));
    }

    #[test]
    fn test_rejects_items_per_page_above_total() {
        let err = PaginatorConfig::new(11, 10, 0).validate().unwrap_err();
        assert_eq!(err.field(), Some("itemsPerPage"));
    }

    #[test]
    fn test_context_size_bound_is_total_items() {
        // 4 pages, but the bound is the item count
        assert!(PaginatorConfig::new(3, 10, 5).validate().is_ok());
        assert!(PaginatorConfig::new(3, 10, 10).validate().is_ok());

        let err = PaginatorConfig::new(3, 10, 11).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidContextSize { value: 11, max: 10 }
        ));

        let err = PaginatorConfig::new(3, 10, -2).validate().unwrap_err();
        assert_eq!(err.field(), Some("contextSize"));

        assert!(PaginatorConfig::new(3, 10, -1).validate().is_ok());
    }

    #[test]
    fn test_context_size_checked_before_items_per_page() {
        let err = PaginatorConfig::new(0, 10, 20).validate().unwrap_err();
        assert_eq!(err.field(), Some("contextSize"));
    }

    #[test]
    fn test_empty_data_set() {
        let err = PaginatorConfig::new(25, 0, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidItemsPerPage { value: 25, max: 0 }
        ));

        let err = PaginatorConfig::new(1, 0, -1).validate().unwrap_err();
        assert_eq!(err.field(), Some("itemsPerPage"));

        let err = PaginatorConfig::new(1, 0, 1).validate().unwrap_err();
        assert_eq!(err.field(), Some("contextSize"));
    }

    #[test]
    fn test_extreme_values() {
        let config = PaginatorConfig::new(i64::MAX, i64::MAX, i64::MAX);
        assert!(config.validate().is_ok());
        assert_eq!(config.total_pages(), 1);
    }

    #[test]
    fn test_rejects_page_count_beyond_u32() {
        let json = concat!(
            r#"{"itemsPerPage":1000,"totalItems":9223372036854775807,"#,
            r#""contextSize":9223372036854775806}"#,
        );
        let config = PaginatorConfig::from_json(json).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigurationError::TooManyPages { .. }));
        assert_eq!(err.field(), Some("totalItems"));

        let largest = PaginatorConfig::new(1, u32::MAX as i64, 0);
        assert!(largest.validate().is_ok());
        assert!(PaginatorConfig::new(1, u32::MAX as i64 + 1, 0).validate().is_err());
    }

    #[test]
    fn test_negative_total_items() {
        let err = PaginatorConfig::new(1, -5, -1).validate().unwrap_err();
        assert_eq!(err.field(), Some("totalItems"));
    }

    #[test]
    fn test_from_json() {
        let config = PaginatorConfig::from_json(
            r#"{"itemsPerPage": 10, "totalItems": 95, "contextSize": 2, "nextText": "More"}"#,
        )
        .unwrap();
        assert_eq!(config.items_per_page, 10);
        assert_eq!(config.total_items, 95);
        assert_eq!(config.context_size, 2);
        assert_eq!(config.prev_text, "Prev");
        assert_eq!(config.next_text, "More");
        assert_eq!(config.total_pages(), 10);
    }

    #[test]
    fn test_from_json_keeps_invalid_values_for_validation() {
        let config =
            PaginatorConfig::from_json(r#"{"itemsPerPage": -3, "totalItems": 4}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = PaginatorConfig::from_json(r#"{"itemsPerPage": "ten"}"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::Malformed(_)));
    }
}
