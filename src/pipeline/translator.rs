/*!
 * Translator, the third pipeline stage.
 *
 * Resolves `[[phrase]]` markers against the persisted translation table
 * and expands every region into one copy per known target language plus
 * one copy for the source language. Phrases unknown to the table are
 * registered with an empty entry so a human editor can fill them in on a
 * later run; the table is durably rewritten once, at stage end, when
 * that happened. Missing translations are recoverable: the source text
 * is used as fallback and a diagnostic is logged.
 *
 * After region expansion the named code fragments from the table's
 * second namespace are appended, one per language, falling back to the
 * source-language text where a language has no entry.
 */

use log::warn;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::TableError;
use crate::region::{LocalizedRegion, Region, RegionBody};
use crate::table::{TableStore, TranslationTable};

// @const: Translatable phrase pattern
static PHRASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").unwrap());

/// Phrase resolution and per-language region expansion
pub struct Translator<'a> {
    /// Injected table persistence
    store: &'a dyn TableStore,

    /// Fixed source language code
    source_language: String,
}

impl<'a> Translator<'a> {
    /// Create a translator over `store` with the given source language.
    pub fn new(store: &'a dyn TableStore, source_language: &str) -> Self {
        Translator {
            store,
            source_language: source_language.to_string(),
        }
    }

    /// Expand `regions` into one localized copy per known language plus
    /// the source-language copies, then append the table's fragments.
    ///
    /// Loads the table once up front and persists it before returning if
    /// any new phrase was registered. Running twice against the table
    /// the first run wrote performs no further mutation.
    pub fn translate(&self, regions: &[Region]) -> Result<Vec<LocalizedRegion>, TableError> {
        let mut table = self.store.load()?;

        // Register unseen phrases first so the table grows even when a
        // language has no translations yet
        let mut dirty = false;
        for region in regions {
            for segment in region.body.segments() {
                for caps in PHRASE_REGEX.captures_iter(segment) {
                    let phrase = &caps[1];
                    if table.register_phrase(phrase) {
                        warn!("adding key for missing translation entry '{}'", phrase);
                        dirty = true;
                    }
                }
            }
        }

        let languages = table.known_languages(&self.source_language);

        let mut expanded = Vec::new();
        for lang in &languages {
            for region in regions {
                expanded.push(self.localize(region, lang, &table));
            }
        }
        for region in regions {
            expanded.push(self.localize(region, &self.source_language, &table));
        }

        self.append_fragments(&table, &languages, &mut expanded);

        if dirty {
            self.store.persist(&table)?;
        }

        Ok(expanded)
    }

    /// Produce the copy of `region` resolved for `lang`.
    fn localize(&self, region: &Region, lang: &str, table: &TranslationTable) -> LocalizedRegion {
        // Phrases are resolved per chunk so they never span a placeholder
        let body = match &region.body {
            RegionBody::Plain(content) => RegionBody::Plain(self.resolve(content, lang, table)),
            RegionBody::Template { chunks, params } => RegionBody::Template {
                chunks: chunks
                    .iter()
                    .map(|chunk| self.resolve(chunk, lang, table))
                    .collect(),
                params: params.clone(),
            },
        };

        LocalizedRegion {
            name: region.name.clone(),
            lang: lang.to_string(),
            body,
        }
    }

    /// Substitute every phrase marker in `text` for `lang`.
    fn resolve(&self, text: &str, lang: &str, table: &TranslationTable) -> String {
        PHRASE_REGEX
            .replace_all(text, |caps: &Captures<'_>| {
                let phrase = &caps[1];
                if lang == self.source_language {
                    return phrase.to_string();
                }
                match table.lookup_phrase(phrase, lang) {
                    Some(translation) => translation.to_string(),
                    None => {
                        // Recoverable: fall back to the source text
                        warn!("missing translation for '{}' (language: {})", phrase, lang);
                        phrase.to_string()
                    }
                }
            })
            .into_owned()
    }

    /// Append one synthetic region per fragment name and language.
    fn append_fragments(
        &self,
        table: &TranslationTable,
        languages: &[String],
        expanded: &mut Vec<LocalizedRegion>,
    ) {
        for name in table.fragments.keys() {
            for lang in languages
                .iter()
                .chain(std::iter::once(&self.source_language))
            {
                let content = match table.fragment_text(name, lang, &self.source_language) {
                    Some(text) => text.to_string(),
                    None => {
                        warn!(
                            "fragment '{}' has no entry for '{}' and no source fallback",
                            name, lang
                        );
                        String::new()
                    }
                };
                expanded.push(LocalizedRegion {
                    name: name.clone(),
                    lang: lang.clone(),
                    body: RegionBody::Plain(content),
                });
            }
        }
    }
}
