//! Configuration errors and their advisory messages

use thiserror::Error;

/// Advisory text shown instead of the page controls when `contextSize` is rejected
pub const CONTEXT_SIZE_WARNING: &str = "PAGINATOR WARNING:\n\
Incorrect number entered for displaying pages before/after the active one!\n\
Only -1 and higher values are accepted, and value cannot be higher than your total item count\n\
Check the *contextSize* value.";

/// Advisory text shown instead of the page controls when `itemsPerPage` is rejected
pub const ITEMS_PER_PAGE_WARNING: &str = "PAGINATOR WARNING:\n\
Incorrect number entered for amount of items per page!\n\
Minimum of 1 is required, and the maximum cannot exceed your total item count\n\
Check the *itemsPerPage* value.";

/// Advisory text shown instead of the page controls when `totalItems` is rejected
pub const TOTAL_ITEMS_WARNING: &str = "PAGINATOR WARNING:\n\
Incorrect number entered for the total item count!\n\
Only 0 and higher values are accepted\n\
Check the *totalItems* value.";

/// Advisory text shown when the item count splits into more pages than supported
pub const TOO_MANY_PAGES_WARNING: &str = "PAGINATOR WARNING:\n\
Too many pages for the paginator!\n\
The total item count divided by the items per page cannot exceed 4294967295 pages\n\
Check the *totalItems* and *itemsPerPage* values.";

/// Advisory text shown when the configuration could not be parsed at all
pub const MALFORMED_WARNING: &str = "PAGINATOR WARNING:\n\
The paginator configuration could not be read.\n\
Check that *itemsPerPage*, *totalItems* and *contextSize* are integers.";

/// Rejected paginator configuration.
///
/// Never fatal for the host: the widget shows [`warning_message`](Self::warning_message)
/// and renders no page controls.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("totalItems must be 0 or higher, got {value}")]
    NegativeTotalItems { value: i64 },

    #[error("contextSize must be within [-1, {max}], got {value}")]
    InvalidContextSize { value: i64, max: i64 },

    #[error("itemsPerPage must be within [1, {max}], got {value}")]
    InvalidItemsPerPage { value: i64, max: i64 },

    #[error("totalItems yields {pages} pages, at most {max} are supported")]
    TooManyPages { pages: u64, max: u64 },

    #[error("malformed paginator configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ConfigurationError {
    /// Name of the configuration field at fault, as the host knows it
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigurationError::NegativeTotalItems { .. } => Some("totalItems"),
            ConfigurationError::InvalidContextSize { .. } => Some("contextSize"),
            ConfigurationError::InvalidItemsPerPage { .. } => Some("itemsPerPage"),
            ConfigurationError::TooManyPages { .. } => Some("totalItems"),
            ConfigurationError::Malformed(_) => None,
        }
    }

    /// Static, pre-templated diagnostic for the host to display
    pub fn warning_message(&self) -> &'static str {
        match self {
            ConfigurationError::NegativeTotalItems { .. } => TOTAL_ITEMS_WARNING,
            ConfigurationError::InvalidContextSize { .. } => CONTEXT_SIZE_WARNING,
            ConfigurationError::InvalidItemsPerPage { .. } => ITEMS_PER_PAGE_WARNING,
            ConfigurationError::TooManyPages { .. } => TOO_MANY_PAGES_WARNING,
            ConfigurationError::Malformed(_) => MALFORMED_WARNING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_value_and_bound() {
        let err = ConfigurationError::InvalidContextSize { value: 12, max: 10 };
        assert_eq!(err.to_string(), "contextSize must be within [-1, 10], got 12");

        let err = ConfigurationError::InvalidItemsPerPage { value: 0, max: 10 };
        assert_eq!(err.to_string(), "itemsPerPage must be within [1, 10], got 0");
    }

    #[test]
    fn test_warning_message_names_field() {
        let err = ConfigurationError::InvalidContextSize { value: -2, max: 3 };
        assert_eq!(err.field(), Some("contextSize"));
        assert!(err.warning_message().contains("*contextSize*"));

        let err = ConfigurationError::InvalidItemsPerPage { value: 4, max: 3 };
        assert_eq!(err.field(), Some("itemsPerPage"));
        assert!(err.warning_message().contains("*itemsPerPage*"));
    }

    #[test]
    fn test_malformed_from_json_error() {
        let json_err = serde_json::from_str::<i64>("not a number").unwrap_err();
        let err = ConfigurationError::from(json_err);
        assert_eq!(err.field(), None);
        assert_eq!(err.warning_message(), MALFORMED_WARNING);
    }
}
