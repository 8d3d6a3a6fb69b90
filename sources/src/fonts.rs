//! Font stylesheet prefetch.
//!
//! Selecting a font family triggers a fire-and-forget fetch of the hosted
//! stylesheet named after the family (whitespace replaced with `+`).
//! Terminal emulators pick their own glyphs, so the body is discarded; the
//! request keeps the load-on-select contract for web front ends.

use crate::SourceError;
use crate::util::http_client;

/// Resource name for a font family: whitespace runs become `+`.
pub fn resource_name(family: &str) -> String {
    family.split_whitespace().collect::<Vec<_>>().join("+")
}

/// Hosted stylesheet URL for a font family.
pub fn stylesheet_url(family: &str) -> String {
    format!(
        "https://fonts.googleapis.com/css?family={}&display=swap",
        resource_name(family)
    )
}

/// Fetch the stylesheet for `family`, discarding the body.
pub async fn prefetch(family: &str) -> Result<(), SourceError> {
    let client = http_client();
    let res = client.get(stylesheet_url(family)).send().await?;
    if !res.status().is_success() {
        return Err(SourceError::InvalidSource(format!(
            "font stylesheet returned {}",
            res.status()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_replaces_spaces() {
        assert_eq!(resource_name("Source Code Pro"), "Source+Code+Pro");
        assert_eq!(resource_name("Roboto Mono"), "Roboto+Mono");
        assert_eq!(resource_name("  Fira  Code "), "Fira+Code");
    }

    #[test]
    fn test_resource_name_passthrough() {
        assert_eq!(resource_name("Courier"), "Courier");
        assert_eq!(resource_name(""), "");
    }

    #[test]
    fn test_stylesheet_url() {
        assert_eq!(
            stylesheet_url("VT323"),
            "https://fonts.googleapis.com/css?family=VT323&display=swap"
        );
        assert!(stylesheet_url("IBM Plex Mono").contains("IBM+Plex+Mono"));
    }
}
