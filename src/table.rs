/*!
 * Translation table model and persistence.
 *
 * The table is the only persistent entity in the pipeline. It holds two
 * namespaces: `phrases` maps source phrases to per-language translations,
 * and `fragments` maps fragment names to per-language code fragments that
 * are injected wholesale rather than extracted from markup. The table is
 * read at the start of the translator stage and durably rewritten when
 * new phrases were discovered during that run.
 *
 * Persistence goes through the `TableStore` trait so the translator can
 * be exercised against an in-memory fake in tests.
 */

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::TableError;
use crate::file_utils::FileManager;

/// Per-language text for one phrase or fragment
pub type LanguageMap = BTreeMap<String, String>;

/// Persisted phrase and fragment translations.
///
/// BTreeMap keys give a stable enumeration order, which keeps the
/// generated output byte-reproducible across runs for an unchanged table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTable {
    /// Source phrase -> language code -> translated text
    #[serde(default)]
    pub phrases: BTreeMap<String, LanguageMap>,

    /// Fragment name -> language code -> fragment text
    #[serde(default)]
    pub fragments: BTreeMap<String, LanguageMap>,
}

impl TranslationTable {
    /// Every language code appearing under either namespace, except the
    /// source language. Each of these causes one full duplication pass
    /// over the extracted regions.
    pub fn known_languages(&self, source_language: &str) -> Vec<String> {
        let mut languages = BTreeSet::new();
        for entry in self.phrases.values().chain(self.fragments.values()) {
            for lang in entry.keys() {
                if lang != source_language {
                    languages.insert(lang.clone());
                }
            }
        }
        languages.into_iter().collect()
    }

    /// Look up a non-empty translation of `phrase` for `lang`.
    pub fn lookup_phrase(&self, phrase: &str, lang: &str) -> Option<&str> {
        self.phrases
            .get(phrase)
            .and_then(|entry| entry.get(lang))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Register a phrase with an empty per-language entry if it is not
    /// already known. Returns true when the table was modified.
    pub fn register_phrase(&mut self, phrase: &str) -> bool {
        if self.phrases.contains_key(phrase) {
            return false;
        }
        self.phrases.insert(phrase.to_string(), LanguageMap::new());
        true
    }

    /// Fragment text for `lang`, falling back to the source-language entry.
    pub fn fragment_text(&self, name: &str, lang: &str, source_language: &str) -> Option<&str> {
        let entry = self.fragments.get(name)?;
        entry
            .get(lang)
            .or_else(|| entry.get(source_language))
            .map(String::as_str)
    }
}

/// Persistence contract for the translation table.
///
/// `load` runs once at the start of the translator stage; `persist` runs
/// at most once, at stage end, when new phrases were discovered.
pub trait TableStore {
    /// Read the current table.
    fn load(&self) -> Result<TranslationTable, TableError>;

    /// Durably rewrite the table.
    fn persist(&self, table: &TranslationTable) -> Result<(), TableError>;
}

/// Table store backed by a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path of the table file
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the table file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the table file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableStore for JsonFileStore {
    fn load(&self) -> Result<TranslationTable, TableError> {
        // A missing file means a fresh table; it is created on first persist
        if !FileManager::file_exists(&self.path) {
            debug!("translation table {:?} not found, starting empty", self.path);
            return Ok(TranslationTable::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| TableError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| TableError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&self, table: &TranslationTable) -> Result<(), TableError> {
        // Pretty-printed for human review and editing
        let json = serde_json::to_string_pretty(table).map_err(|source| TableError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(source),
        })?;

        FileManager::write_atomic(&self.path, &json).map_err(|source| TableError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(source.to_string()),
        })?;

        debug!("translation table rewritten: {:?}", self.path);
        Ok(())
    }
}

/// In-memory table store for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Current table contents
    table: Mutex<TranslationTable>,

    /// Number of persist calls observed
    persist_count: Mutex<usize>,
}

impl MemoryStore {
    /// Create a store pre-loaded with `table`.
    pub fn new(table: TranslationTable) -> Self {
        MemoryStore {
            table: Mutex::new(table),
            persist_count: Mutex::new(0),
        }
    }

    /// Snapshot of the current table contents.
    pub fn snapshot(&self) -> TranslationTable {
        self.table.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of times `persist` has been called.
    pub fn persist_count(&self) -> usize {
        *self
            .persist_count
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }
}

impl TableStore for MemoryStore {
    fn load(&self) -> Result<TranslationTable, TableError> {
        Ok(self.snapshot())
    }

    fn persist(&self, table: &TranslationTable) -> Result<(), TableError> {
        *self.table.lock().unwrap_or_else(|e| e.into_inner()) = table.clone();
        *self
            .persist_count
            .lock()
            .unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}
