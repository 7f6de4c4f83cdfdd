//! Deferred link destinations.
//!
//! A link's destination is the text rendered inside it, which is unknown when
//! its opening tag is written. The opening tag carries a placeholder instead,
//! replaced once rendering is complete.

/// Placeholder prefix. Escaped text never contains a raw `<`, so placeholders
/// cannot collide with rendered text.
const PLACEHOLDER_PREFIX: &str = "<href:";

/// Placeholder written in place of link `id`'s destination.
pub(crate) fn placeholder(id: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{id}>")
}

/// Normalize accumulated link text into a destination.
///
/// Surrounding whitespace is trimmed. Destinations without an `http://` or
/// `https://` scheme get `default_scheme` prepended; empty ones stay empty.
pub(crate) fn normalize_href(text: &str, default_scheme: &str) -> String {
    let href = text.trim();
    if href.is_empty() || has_http_scheme(href) {
        href.to_owned()
    } else {
        format!("{default_scheme}{href}")
    }
}

fn has_http_scheme(href: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Replace every placeholder in `output` with its destination in `hrefs`.
///
/// Unknown placeholders are left untouched.
pub(crate) fn substitute(output: &str, hrefs: &[String]) -> String {
    let mut result = String::with_capacity(output.len());
    let mut rest = output;

    while let Some(start) = rest.find(PLACEHOLDER_PREFIX) {
        result.push_str(&rest[..start]);
        let after = &rest[start + PLACEHOLDER_PREFIX.len()..];

        let resolved = after.find('>').and_then(|end| {
            let id: usize = after[..end].parse().ok()?;
            hrefs.get(id).map(|href| (href, end))
        });

        match resolved {
            Some((href, end)) => {
                result.push_str(href);
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(PLACEHOLDER_PREFIX);
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
