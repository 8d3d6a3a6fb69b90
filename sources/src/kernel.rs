//! Default source text for the typer.
//!
//! When the user has no persisted source text, the app performs a single
//! fetch of the stock "kernel" listing at startup. There is no retry; a
//! failed fetch falls back to the bundled copy of the same listing, so a
//! first run works offline too.

use crate::SourceError;
use crate::util::http_client;

/// Fixed location of the default kernel listing.
pub const KERNEL_URL: &str = "https://hackertyper.net/kernel.txt";

/// Bundled copy of the kernel listing, served when the fetch fails.
pub const BUNDLED: &str = include_str!("../assets/kernel.txt");

/// Download the default kernel text.
///
/// A non-success status or a blank body is an error; some mirrors answer
/// 200 with an empty page.
pub async fn download() -> Result<String, SourceError> {
    let client = http_client();
    let res = client.get(KERNEL_URL).send().await?;
    if !res.status().is_success() {
        return Err(SourceError::InvalidSource(format!(
            "kernel fetch returned {}",
            res.status()
        )));
    }

    let text = res.text().await?;
    if text.trim().is_empty() {
        return Err(SourceError::InvalidSource(
            "kernel text is empty".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_kernel_is_usable() {
        // the offline fallback must be real text, not a stub
        assert!(!BUNDLED.trim().is_empty());
        assert!(BUNDLED.lines().count() > 100);
        assert!(BUNDLED.contains("#include <linux/"));
    }
}
