//! Navigation — page-name matching, hybrid panel targets, and fragment
//! handling.
//!
//! The site is addressed both by extension-less router paths (`/projects`)
//! and by legacy `*.html` file names; both spell the same page. Matching is
//! case-insensitive on the final path segment, with any `.html`/`.htm`
//! suffix stripped and query/fragment ignored.

/// Page name used when the location path has no file-name segment.
pub const INDEX_PAGE: &str = "index";

/// A single navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label.
    pub label: &'static str,
    /// Link href, compared against the location per [`is_active`].
    pub href: &'static str,
    /// Optional in-page panel target for hybrid navigation. When present,
    /// activating the link switches a panel instead of navigating.
    pub panel: Option<&'static str>,
}

fn normalize_segment(segment: &str) -> Option<String> {
    let bare = segment.split(['?', '#']).next().unwrap_or_default();
    if bare.is_empty() {
        return None;
    }
    let lower = bare.to_ascii_lowercase();
    let name = lower
        .strip_suffix(".html")
        .or_else(|| lower.strip_suffix(".htm"))
        .unwrap_or(&lower);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Name of the page a location path points at.
///
/// The file-name portion of the path decides; an empty portion (the bare
/// root or a trailing slash) defaults to [`INDEX_PAGE`].
#[must_use]
pub fn page_name(path: &str) -> String {
    path.rsplit('/')
        .next()
        .and_then(normalize_segment)
        .unwrap_or_else(|| INDEX_PAGE.to_string())
}

/// Name of the page a link href points at, if one is extractable.
///
/// Any path prefix, query, and fragment are ignored. The bare root `"/"`
/// names the index page. Hrefs with no file-name segment (empty,
/// fragment-only, query-only, non-root trailing slash) yield `None`; such
/// links are never marked active from the location.
#[must_use]
pub fn href_page_name(href: &str) -> Option<String> {
    if href == "/" {
        return Some(INDEX_PAGE.to_string());
    }
    let without_scheme = href.split_once("://").map_or(href, |(_, rest)| rest);
    without_scheme.rsplit('/').next().and_then(normalize_segment)
}

/// Whether a link href points at the given current page.
#[must_use]
pub fn is_active(current_page: &str, href: &str) -> bool {
    href_page_name(href).is_some_and(|name| name.eq_ignore_ascii_case(current_page))
}

/// Whether a location fragment is one of the literal malformed anchors
/// that should be stripped from the displayed URL without reloading.
#[must_use]
pub fn is_malformed_fragment(hash: &str) -> bool {
    matches!(hash, "#" | "#undefined")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_index_when_path_has_no_file_name() {
        assert_eq!(page_name("/"), "index");
        assert_eq!(page_name(""), "index");
        assert_eq!(page_name("/portfolio/"), "index");
    }

    #[test]
    fn should_strip_extension_and_lowercase_page_names() {
        assert_eq!(page_name("/About.HTML"), "about");
        assert_eq!(page_name("/projects"), "projects");
        assert_eq!(page_name("/site/resume.htm"), "resume");
        assert_eq!(page_name("contact.html?draft=1"), "contact");
    }

    #[test]
    fn should_extract_href_page_name_ignoring_prefix_query_and_fragment() {
        assert_eq!(href_page_name("/projects"), Some("projects".to_string()));
        assert_eq!(
            href_page_name("Projects.HTML"),
            Some("projects".to_string())
        );
        assert_eq!(
            href_page_name("/site/contact.html#form"),
            Some("contact".to_string())
        );
        assert_eq!(
            href_page_name("https://example.com/site/about.html"),
            Some("about".to_string())
        );
        assert_eq!(href_page_name("/"), Some("index".to_string()));
    }

    #[test]
    fn should_not_extract_page_name_when_href_has_no_file_segment() {
        assert_eq!(href_page_name(""), None);
        assert_eq!(href_page_name("#contact"), None);
        assert_eq!(href_page_name("/#skills"), None);
        assert_eq!(href_page_name("?tab=1"), None);
        assert_eq!(href_page_name("/projects/"), None);
    }

    #[test]
    fn should_mark_exactly_the_matching_links_active() {
        let hrefs = [
            "/",
            "/projects",
            "Projects.HTML",
            "/resume",
            "#top",
            "",
        ];
        let active: Vec<&str> = hrefs
            .iter()
            .copied()
            .filter(|href| is_active("projects", href))
            .collect();
        assert_eq!(active, vec!["/projects", "Projects.HTML"]);
    }

    #[test]
    fn should_mark_root_link_active_on_index_page() {
        assert!(is_active("index", "/"));
        assert!(!is_active("projects", "/"));
    }

    #[test]
    fn should_recognize_only_literal_malformed_fragments() {
        assert!(is_malformed_fragment("#"));
        assert!(is_malformed_fragment("#undefined"));
        assert!(!is_malformed_fragment(""));
        assert!(!is_malformed_fragment("#skills"));
    }
}
