//! Integration tests for dictionary registration and lookup.

use std::sync::Arc;
use std::thread;

use nuwords::{
    Dictionary, DictionaryRegistry, LanguageId, Translate, TranslateError, TranslationConfig,
    Translator,
};

fn pirate() -> Dictionary {
    let mut tables = Dictionary::english().to_tables();
    tables.zero = "nothin'".to_owned();
    tables.bigs[1] = "doubloons".to_owned();
    Dictionary::new(tables).unwrap()
}

// =========================================================================
// Instance registry
// =========================================================================

#[test]
fn new_registry_is_empty() {
    let registry = DictionaryRegistry::new();
    assert!(registry.languages().is_empty());
    assert!(registry.get("En").is_none());
}

#[test]
fn builtins_include_english() {
    let registry = DictionaryRegistry::with_builtins();
    assert_eq!(registry.languages(), vec!["En"]);
    assert_eq!(*registry.get("En").unwrap(), Dictionary::english());
}

#[test]
fn resolve_by_name() {
    let registry = DictionaryRegistry::with_builtins();
    registry.register("Pirate", pirate());
    let dictionary = registry.resolve(&LanguageId::from("Pirate")).unwrap();
    assert_eq!(dictionary.zero(), "nothin'");
}

#[test]
fn resolve_handle_returns_same_dictionary() {
    let registry = DictionaryRegistry::new();
    let handle = Arc::new(pirate());
    let resolved = registry
        .resolve(&LanguageId::Dictionary(Arc::clone(&handle)))
        .unwrap();
    assert!(Arc::ptr_eq(&handle, &resolved));
}

#[test]
fn resolve_unknown_name_fails_with_suggestions() {
    let registry = DictionaryRegistry::with_builtins();
    let err = registry.resolve(&LanguageId::from("en")).unwrap_err();
    assert_eq!(
        err,
        TranslateError::UnsupportedLanguage {
            name: "en".to_owned(),
            suggestions: vec!["En".to_owned()],
        }
    );
}

#[test]
fn names_are_case_sensitive() {
    let registry = DictionaryRegistry::with_builtins();
    assert!(registry.contains("En"));
    assert!(!registry.contains("EN"));
}

#[test]
fn last_registration_wins() {
    let registry = DictionaryRegistry::with_builtins();
    assert!(registry.register("Pirate", Dictionary::english()).is_none());
    let previous = registry.register("Pirate", pirate()).unwrap();
    assert_eq!(*previous, Dictionary::english());
    assert_eq!(registry.get("Pirate").unwrap().zero(), "nothin'");
    assert_eq!(registry.languages(), vec!["En", "Pirate"]);
}

#[test]
fn translator_uses_its_own_registry() {
    let registry = Arc::new(DictionaryRegistry::new());
    registry.register("Pirate", pirate());
    let translator = Translator::with_registry(Arc::clone(&registry));

    let config = TranslationConfig::with_language("Pirate");
    assert_eq!(
        translator.translate(2_000, &config).unwrap(),
        "two doubloons"
    );

    // English is not in this registry.
    let err = translator
        .translate(1, &TranslationConfig::default())
        .unwrap_err();
    assert!(matches!(err, TranslateError::UnsupportedLanguage { .. }));
}

#[test]
fn concurrent_register_and_resolve() {
    let registry = Arc::new(DictionaryRegistry::with_builtins());

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for j in 0..50 {
                    let dictionary = if j % 2 == 0 {
                        Dictionary::english()
                    } else {
                        pirate()
                    };
                    registry.register(format!("Lang{i}"), dictionary);
                    registry.register("Shared", pirate());
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let translator = Translator::with_registry(registry);
                for _ in 0..200 {
                    let words = translator
                        .translate(1_234_013, &TranslationConfig::default())
                        .unwrap();
                    assert_eq!(words, "one million two hundred thirty-four thousand thirteen");
                    if let Some(shared) = translator.registry().get("Shared") {
                        assert_eq!(*shared, pirate());
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }
    assert_eq!(
        registry.languages(),
        vec!["En", "Lang0", "Lang1", "Lang2", "Lang3", "Shared"]
    );
}

// =========================================================================
// Global registry
// =========================================================================

#[test]
fn global_registry_starts_with_english() {
    assert!(nuwords::languages().contains(&"En".to_owned()));
    let english = nuwords::resolve(&LanguageId::default()).unwrap();
    assert_eq!(english.tens()[3], "forty");
}

#[test]
fn global_registration_is_visible_to_default_translator() {
    nuwords::register("GlobalPirate", pirate());
    let config = TranslationConfig::with_language("GlobalPirate");
    assert_eq!(Translator::new().translate(0, &config).unwrap(), "nothin'");
}
