/*!
 * Assembler, the fourth and final pipeline stage.
 *
 * Groups the localized regions by language and emits the generated
 * header text: each non-source language gets a `#if defined LANG_XX` /
 * `#elif defined LANG_XX` branch, and the source language is the final
 * unconditional `#else` branch, so exactly one language block survives
 * compilation. Plain regions become a single PROGMEM constant plus a
 * no-argument alias macro; template regions become one constant per
 * chunk plus a macro that concatenates chunks with the caller's
 * parameter expressions.
 */

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::AssembleError;
use crate::region::{LocalizedRegion, RegionBody};

/// Assemble localized regions into the generated header text.
///
/// Non-source languages appear in sorted order; the source-language
/// block is always last and unconditional regardless of input order.
/// When the table knows no other language, the source block is emitted
/// bare, with no guard chain.
pub fn assemble(
    regions: &[LocalizedRegion],
    source_language: &str,
) -> Result<String, AssembleError> {
    if regions.is_empty() {
        return Err(AssembleError::NoRegions);
    }

    // Group by language, preserving region order within each group
    let mut groups: BTreeMap<&str, Vec<&LocalizedRegion>> = BTreeMap::new();
    for region in regions {
        groups.entry(region.lang.as_str()).or_default().push(region);
    }
    let source_group = groups.remove(source_language).unwrap_or_default();

    // The assembler indexes by name, so duplicates within one language
    // would silently shadow each other in the generated code
    for (lang, group) in groups
        .iter()
        .map(|(lang, group)| (*lang, group.as_slice()))
        .chain(std::iter::once((source_language, source_group.as_slice())))
    {
        let mut seen = BTreeSet::new();
        for region in group {
            if !seen.insert(region.name.as_str()) {
                return Err(AssembleError::DuplicateName {
                    name: region.name.clone(),
                    lang: lang.to_string(),
                });
            }
        }
    }

    let guarded = !groups.is_empty();
    let mut blocks = Vec::new();

    for (index, (lang, group)) in groups.iter().enumerate() {
        let directive = if index == 0 { "#if" } else { "#elif" };
        let mut block = format!("{} defined LANG_{}\n", directive, lang.to_uppercase());
        block.push_str(&emit_group(group));
        blocks.push(block);
    }

    let mut source_block = String::new();
    if guarded {
        source_block.push_str("#else\n");
    }
    source_block.push_str(&emit_group(&source_group));
    blocks.push(source_block);

    let mut output = blocks.join("\n");
    if guarded {
        output.push_str("\n#endif");
    }
    output.push('\n');

    Ok(output)
}

/// Emit all definitions of one language block.
fn emit_group(group: &[&LocalizedRegion]) -> String {
    group
        .iter()
        .map(|region| emit_region(region))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit the constant and macro definitions for one region.
fn emit_region(region: &LocalizedRegion) -> String {
    match &region.body {
        RegionBody::Plain(content) => {
            let literal = escape_literal(&collapse_whitespace(content));
            format!(
                "const char _{name}[] PROGMEM = \"{literal}\";\n#define {name} (FPSTR(_{name}))",
                name = region.name,
                literal = literal,
            )
        }
        RegionBody::Template { chunks, params } => {
            // Template value, define separate parts
            let mut out = String::new();
            for (index, chunk) in chunks.iter().enumerate() {
                let literal = escape_literal(&collapse_whitespace(chunk));
                out.push_str(&format!(
                    "const char _{}_{}[] PROGMEM = \"{}\";\n",
                    region.name, index, literal
                ));
            }

            // Interleave chunk constants with the caller's argument
            // expressions; boundary chunks keep the structure positionally
            // stable even when their text is empty
            let mut pieces = Vec::new();
            for (index, _) in chunks.iter().enumerate() {
                let mut piece = format!("(FPSTR(_{}_{}))", region.name, index);
                if let Some(param) = params.get(index) {
                    piece.push_str(&format!(" + ({})", param));
                }
                pieces.push(piece);
            }

            out.push_str(&format!(
                "#define {}({}) \\\n\t (String() + {})",
                region.name,
                params.join(", "),
                pieces.join(" + ")
            ));
            out
        }
    }
}

/// Collapse whitespace the way the upstream minifier would: runs of
/// whitespace become one space, whitespace touching a tag boundary is
/// dropped, and the result is trimmed.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.trim().chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if c != '<' && !out.ends_with('>') {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }

    out
}

/// Escape a chunk so it is safe inside a double-quoted C string literal.
fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
