use prompt_museum::core::preferences::{FAVORITES_KEY, RECENTS_KEY};
use prompt_museum::core::storage::PREFERENCES_FILE;
use prompt_museum::{FileStore, KeyValueStore, PreferenceStore, PromptCatalog, Rating, Theme};

fn reopen(dir: &std::path::Path) -> PreferenceStore<FileStore> {
    PreferenceStore::load_with_theme(FileStore::in_dir(dir), Theme::Dark)
}

#[test]
fn rating_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut prefs = reopen(dir.path());
    prefs.set_rating("x", Rating::new(4).unwrap());
    drop(prefs);

    let prefs = reopen(dir.path());
    assert_eq!(prefs.rating("x"), Rating::new(4));
    assert_eq!(prefs.rating("y"), None);
}

#[test]
fn favorites_recents_and_theme_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = PromptCatalog::builtin().unwrap();
    let ids: Vec<_> = catalog.records().iter().take(7).collect();

    let mut prefs = reopen(dir.path());
    assert!(prefs.toggle_favorite(&ids[0].id));
    for record in &ids {
        prefs.record_view(record);
    }
    prefs.set_theme(Theme::Light);
    drop(prefs);

    let prefs = reopen(dir.path());
    assert!(prefs.is_favorite(&ids[0].id));
    assert_eq!(prefs.theme(), Theme::Light);

    let expected: Vec<String> = ids.iter().rev().take(5).map(|r| r.id.clone()).collect();
    assert_eq!(prefs.recents(), expected.as_slice());
}

#[test]
fn corrupt_values_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = FileStore::in_dir(dir.path());
    store.set(FAVORITES_KEY, "{not json").unwrap();
    store.set(RECENTS_KEY, "[\"a\", \"a\", \"b\"]").unwrap();
    store.set("rating_z", "9").unwrap();
    store.set("theme", "sepia").unwrap();
    drop(store);

    let prefs = reopen(dir.path());
    assert!(prefs.favorites().is_empty());
    assert_eq!(prefs.recents(), ["a".to_string(), "b".to_string()]);
    assert_eq!(prefs.rating("z"), None);
    assert_eq!(prefs.theme(), Theme::Dark);
}

#[test]
fn unreadable_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(PREFERENCES_FILE), "garbage").unwrap();

    let mut prefs = reopen(dir.path());
    assert!(prefs.favorites().is_empty());

    // The next write replaces the broken file
    prefs.set_rating("x", Rating::new(2).unwrap());
    let prefs = reopen(dir.path());
    assert_eq!(prefs.rating("x"), Rating::new(2));
}
