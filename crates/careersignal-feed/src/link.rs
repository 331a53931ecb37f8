//! Apply-link recovery from a single table cell.
//!
//! Feed cells carry links in several shapes: a raw HTML anchor (often
//! wrapping an `<img>` button), markdown `[text](url)`, or a bare URL in
//! prose. Strategies are tried in that order and the first hit wins.

use std::sync::LazyLock;

use regex::Regex;

const HREF_MARKER: &str = "href=\"";

static BARE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[A-Za-z0-9._%/\-?#=&:+~]+").expect("valid bare url regex")
});

/// Recovers a URL from a noisy link cell.
///
/// Precedence:
/// 1. `href="..."` anywhere in the cell.
/// 2. The first `(...)` group, if its contents start with `http://` or `https://`.
/// 3. The first bare `http(s)://` run of URL-safe characters.
///
/// An empty `href=""` is not treated as a match; the later strategies
/// still get a chance at the cell.
///
/// Returns `None` when no strategy matches.
#[must_use]
pub fn extract_link(cell: &str) -> Option<String> {
    from_href(cell)
        .or_else(|| from_markdown(cell))
        .or_else(|| from_bare_url(cell))
        .map(str::to_owned)
}

fn from_href(cell: &str) -> Option<&str> {
    let start = cell.find(HREF_MARKER)? + HREF_MARKER.len();
    let rest = &cell[start..];
    let end = rest.find('"')?;
    let url = &rest[..end];
    (!url.is_empty()).then_some(url)
}

fn from_markdown(cell: &str) -> Option<&str> {
    let open = cell.find('(')?;
    let rest = &cell[open + 1..];
    let close = rest.find(')')?;
    let candidate = rest[..close].trim();
    (candidate.starts_with("http://") || candidate.starts_with("https://")).then_some(candidate)
}

fn from_bare_url(cell: &str) -> Option<&str> {
    BARE_URL_RE.find(cell).map(|m| m.as_str())
}

#[cfg(test)]
#[path = "link_test.rs"]
mod tests;
