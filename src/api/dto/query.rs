//! Query string parameters.
//!
//! A parameter that is present but empty is treated the same as a missing one.

use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

pub const MISSING_QUERY: &str = "Missing query parameter 'q'";
pub const MISSING_URL: &str = "Missing 'url' parameter";

/// `?q=` of the search operation.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(
        required(message = "Missing query parameter 'q'"),
        length(min = 1, message = "Missing query parameter 'q'")
    )]
    pub q: Option<String>,
}

impl SearchParams {
    /// Returns the validated search keyword.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `q` is absent or empty.
    pub fn into_query(self) -> Result<String, AppError> {
        self.validate()?;
        self.q.ok_or_else(|| AppError::bad_request(MISSING_QUERY))
    }
}

/// `?url=` of the details and download operations.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UrlParams {
    #[validate(
        required(message = "Missing 'url' parameter"),
        length(min = 1, message = "Missing 'url' parameter")
    )]
    pub url: Option<String>,
}

impl UrlParams {
    /// Returns the validated page URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `url` is absent or empty.
    pub fn into_url(self) -> Result<String, AppError> {
        self.validate()?;
        self.url.ok_or_else(|| AppError::bad_request(MISSING_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_rejected() {
        let error = SearchParams { q: None }.into_query().unwrap_err();
        assert!(matches!(error, AppError::Validation { .. }));
        assert_eq!(error.message(), MISSING_QUERY);
    }

    #[test]
    fn test_empty_query_counts_as_missing() {
        let error = SearchParams {
            q: Some(String::new()),
        }
        .into_query()
        .unwrap_err();
        assert_eq!(error.message(), MISSING_QUERY);
    }

    #[test]
    fn test_query_passes_through() {
        let q = SearchParams {
            q: Some("Spider-Man".to_string()),
        }
        .into_query()
        .unwrap();
        assert_eq!(q, "Spider-Man");
    }

    #[test]
    fn test_url_params() {
        assert_eq!(
            UrlParams { url: None }.into_url().unwrap_err().message(),
            MISSING_URL
        );
        assert_eq!(
            UrlParams {
                url: Some(String::new())
            }
            .into_url()
            .unwrap_err()
            .message(),
            MISSING_URL
        );
        assert_eq!(
            UrlParams {
                url: Some("https://cinesubz.co/movies/x/".to_string())
            }
            .into_url()
            .unwrap(),
            "https://cinesubz.co/movies/x/"
        );
    }
}
