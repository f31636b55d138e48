/*!
 * Tests for the translation table model and its stores
 */

use flashgen::table::{JsonFileStore, MemoryStore, TableStore, TranslationTable};

use crate::common::{add_fragment, add_phrase, table_with_fragment, table_with_phrase};

#[test]
fn test_knownLanguages_withPhrasesAndFragments_shouldUnionBothNamespaces() {
    let mut table = table_with_phrase("Save", "de", "Speichern");
    add_phrase(&mut table, "Save", "fr", "Enregistrer");
    add_fragment(&mut table, "HTTP_CUSTOM", "it", "// nota");

    let languages = table.known_languages("en");

    assert_eq!(languages, vec!["de", "fr", "it"]);
}

#[test]
fn test_knownLanguages_withSourceEntries_shouldExcludeSourceLanguage() {
    let mut table = table_with_phrase("Save", "en", "Save");
    add_phrase(&mut table, "Save", "de", "Speichern");

    let languages = table.known_languages("en");

    assert_eq!(languages, vec!["de"]);
}

#[test]
fn test_lookupPhrase_withEmptyTranslation_shouldReturnNone() {
    let table = table_with_phrase("Save", "de", "");

    assert!(table.lookup_phrase("Save", "de").is_none());
}

#[test]
fn test_lookupPhrase_withTranslation_shouldReturnIt() {
    let table = table_with_phrase("Save", "de", "Speichern");

    assert_eq!(table.lookup_phrase("Save", "de"), Some("Speichern"));
}

#[test]
fn test_registerPhrase_withNewPhrase_shouldInsertEmptyEntry() {
    let mut table = TranslationTable::default();

    let modified = table.register_phrase("Save");

    assert!(modified);
    assert!(table.phrases.get("Save").unwrap().is_empty());
}

#[test]
fn test_registerPhrase_withKnownPhrase_shouldNotOverwrite() {
    let mut table = table_with_phrase("Save", "de", "Speichern");

    let modified = table.register_phrase("Save");

    assert!(!modified);
    assert_eq!(table.lookup_phrase("Save", "de"), Some("Speichern"));
}

#[test]
fn test_fragmentText_withMissingLanguage_shouldFallBackToSource() {
    let mut table = table_with_fragment("HTTP_CUSTOM", "en", "// generated");
    add_fragment(&mut table, "HTTP_CUSTOM", "de", "// generiert");

    assert_eq!(
        table.fragment_text("HTTP_CUSTOM", "fr", "en"),
        Some("// generated")
    );
    assert_eq!(
        table.fragment_text("HTTP_CUSTOM", "de", "en"),
        Some("// generiert")
    );
}

#[test]
fn test_jsonFileStore_withMissingFile_shouldLoadEmptyTable() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("translation.json"));

    let table = store.load().unwrap();

    assert_eq!(table, TranslationTable::default());
}

#[test]
fn test_jsonFileStore_withPersistedTable_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("translation.json");
    let store = JsonFileStore::new(&path);

    let mut table = table_with_phrase("Save", "de", "Speichern");
    add_fragment(&mut table, "HTTP_CUSTOM", "en", "// generated");

    store.persist(&table).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, table);
}

#[test]
fn test_jsonFileStore_persist_shouldWritePrettyPrintedNamespaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("translation.json");
    let store = JsonFileStore::new(&path);

    store
        .persist(&table_with_phrase("Save", "de", "Speichern"))
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"phrases\""));
    assert!(content.contains("\"fragments\""));
    // Pretty-printed for human review
    assert!(content.contains('\n'));
}

#[test]
fn test_memoryStore_persist_shouldUpdateSnapshotAndCount() {
    let store = MemoryStore::default();
    let table = table_with_phrase("Save", "de", "Speichern");

    store.persist(&table).unwrap();

    assert_eq!(store.snapshot(), table);
    assert_eq!(store.persist_count(), 1);
}
