/*!
 * Template parameterizer, the second pipeline stage.
 *
 * Detects inline `{param}` placeholders (lowercase identifiers in
 * braces) and rewrites any region that carries them into an ordered list
 * of literal chunks plus a parallel list of placeholder names. Regions
 * without placeholders pass through unchanged.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::region::{Region, RegionBody};

// @const: Inline placeholder pattern
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[a-z]+\}").unwrap());

/// Rewrite a region with placeholders into chunks and params.
///
/// For content with `k` placeholders the result holds `k + 1` chunks and
/// `k` params, preserving textual order and duplicate names. Boundary
/// chunks may be empty but always exist. Placeholder names are not
/// validated against any known symbol; that is the consumer's concern.
pub fn parameterize(region: Region) -> Region {
    let RegionBody::Plain(content) = &region.body else {
        return region;
    };

    let mut chunks = Vec::new();
    let mut params = Vec::new();
    let mut last = 0;

    for found in PLACEHOLDER_REGEX.find_iter(content) {
        chunks.push(content[last..found.start()].to_string());
        let token = found.as_str();
        params.push(token[1..token.len() - 1].to_string());
        last = found.end();
    }

    if params.is_empty() {
        // No templates
        return region;
    }
    chunks.push(content[last..].to_string());

    Region {
        name: region.name,
        body: RegionBody::Template { chunks, params },
    }
}
