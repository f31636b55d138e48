/*!
 * Region splitter, the first pipeline stage.
 *
 * Scans raw markup left to right for paired comment markers of the form
 * `<!-- NAME -->` (start) and `<!-- /NAME -->` (end) and yields the
 * ordered sequence of named regions found between them. Marker names
 * must carry the configured prefix followed by an uppercase identifier;
 * comments that do not match the convention are ignored.
 *
 * Regions must be well nested and non-overlapping: only one region can
 * be open at a time, and every structural violation is classified as a
 * distinct fatal error rather than silently recovered from.
 */

use crate::errors::SplitError;
use crate::region::Region;

/// Open-region state while scanning
struct OpenRegion {
    /// Name recorded from the start marker
    name: String,

    /// Byte offset immediately after the start marker
    content_start: usize,
}

/// Split raw markup into the ordered sequence of regions it contains.
///
/// Pure function of the input text; no side effects. Fails on any
/// structural violation and on markup containing no markers at all.
pub fn split(markup: &str, prefix: &str) -> Result<Vec<Region>, SplitError> {
    let mut regions = Vec::new();
    let mut open: Option<OpenRegion> = None;
    let mut pos = 0;

    while let Some(found) = markup[pos..].find("<!--") {
        let comment_start = pos + found;
        let Some(len) = markup[comment_start..].find("-->") else {
            // Unterminated comment, nothing after it can be a marker
            break;
        };
        let comment_end = comment_start + len;
        pos = comment_end + 3;

        let inner_raw = &markup[comment_start + 4..comment_end];
        if let Some(nested) = inner_raw.find("<!--") {
            // A second opener before this comment terminated means the
            // first `<!--` was stray text; resume at the real opener
            pos = comment_start + 4 + nested;
            continue;
        }

        let inner = inner_raw.trim();
        let (is_close, name) = match inner.strip_prefix('/') {
            Some(rest) => (true, rest.trim()),
            None => (false, inner),
        };

        if !is_marker_name(name, prefix) {
            // Ordinary comment
            continue;
        }

        if is_close {
            match open.take() {
                None => {
                    return Err(SplitError::UnopenedClose {
                        name: name.to_string(),
                    });
                }
                Some(region) if region.name != name => {
                    return Err(SplitError::MismatchedClose {
                        expected: region.name,
                        found: name.to_string(),
                    });
                }
                Some(region) => {
                    let content = &markup[region.content_start..comment_start];
                    regions.push(Region::plain(region.name, content));
                }
            }
        } else {
            if let Some(outer) = &open {
                return Err(SplitError::NestedStart {
                    outer: outer.name.clone(),
                    inner: name.to_string(),
                });
            }
            open = Some(OpenRegion {
                name: name.to_string(),
                content_start: pos,
            });
        }
    }

    if let Some(region) = open {
        return Err(SplitError::UnclosedRegion { name: region.name });
    }
    if regions.is_empty() {
        return Err(SplitError::NoRegions);
    }

    Ok(regions)
}

/// Check that `name` is the marker prefix followed by an uppercase
/// identifier (`[A-Z][A-Z0-9_]*`).
fn is_marker_name(name: &str, prefix: &str) -> bool {
    let Some(rest) = name.strip_prefix(prefix) else {
        return false;
    };
    let mut chars = rest.chars();
    matches!(chars.next(), Some('A'..='Z'))
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
