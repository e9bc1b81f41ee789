//! Page-name extraction from a full URL.

use tracing::debug;

/// Derives a short page identifier from a full URL.
///
/// The URL is lower-cased, then the segment after the last `/` is truncated
/// at the first `.` (stripping a file extension). When that yields nothing
/// (URL ends in `/`), the URL is split on `/` and segments equal to the empty
/// string, `host`, or `protocol` are dropped; the last survivor is the page.
///
/// Two historical quirks are kept on purpose: the scheme segment retains its
/// colon (`https:`) and never matches the colon-less `protocol` token, so a
/// bare root URL degrades to `"https:"`; and when nothing survives at all the
/// result is the empty string.
///
/// # Examples
///
/// - `page_name("https://example.com/app/dashboard.html?x=1", "example.com", "https")`
///   → `"dashboard"`
/// - `page_name("https://example.com/app/", "example.com", "https")` → `"app"`
pub fn page_name(href: &str, host: &str, protocol: &str) -> String {
    let href = href.to_lowercase();

    let tail = href.rsplit('/').next().unwrap_or("");
    let page = tail.split('.').next().unwrap_or("");
    if !page.is_empty() {
        return page.to_string();
    }

    debug!(href = %href, "no filename segment, falling back to path segments");
    let survivors: Vec<&str> = href
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != host && *seg != protocol)
        .collect();

    survivors.last().map(|s| s.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_extension() {
        assert_eq!(
            page_name("https://example.com/app/dashboard.html?x=1", "example.com", "https"),
            "dashboard"
        );
        assert_eq!(
            page_name("https://example.com/index.min.js", "example.com", "https"),
            "index"
        );
    }

    #[test]
    fn lowercases_result() {
        assert_eq!(
            page_name("HTTPS://EXAMPLE.COM/About.HTML", "example.com", "https"),
            "about"
        );
    }

    #[test]
    fn bare_segment_without_extension() {
        assert_eq!(
            page_name("https://example.com/dashboard", "example.com", "https"),
            "dashboard"
        );
    }

    #[test]
    fn trailing_slash_falls_back_to_last_directory() {
        assert_eq!(
            page_name("https://example.com/app/settings/", "example.com", "https"),
            "settings"
        );
    }

    #[test]
    fn bare_root_degrades_to_scheme_segment() {
        // Quirk: "https:" keeps its colon so the protocol filter misses it.
        assert_eq!(
            page_name("https://example.com/", "example.com", "https"),
            "https:"
        );
    }

    #[test]
    fn nothing_survives_yields_empty() {
        assert_eq!(page_name("/", "example.com", "https"), "");
        assert_eq!(page_name("", "example.com", "https"), "");
    }
}
