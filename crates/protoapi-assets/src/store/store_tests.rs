#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;
use test_case::test_case;

fn template_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("ts")).unwrap();
    fs::write(dir.path().join("ts/objs.ts.j2"), "override {{ x }}").unwrap();
    dir
}

#[test]
fn AssetStore___embedded___returns_decoded_text() {
    let store = AssetStore::embedded();

    let text = store.get("ts/helper.ts.j2").unwrap();

    assert!(text.contains("generateUrl"));
}

#[test]
fn AssetStore___embedded___same_text_on_repeated_get() {
    let store = AssetStore::embedded();

    let first = store.get("ts/objs.ts.j2").unwrap();
    let second = AssetStore::embedded().get("ts/objs.ts.j2").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn AssetStore___embedded___leading_slash_is_ignored() {
    let store = AssetStore::embedded();

    assert_eq!(
        store.get("/ts/objs.ts.j2").unwrap(),
        store.get("ts/objs.ts.j2").unwrap()
    );
}

#[test_case("ts/missing.j2" ; "unknown key")]
#[test_case("" ; "empty key")]
#[test_case("../Cargo.toml" ; "parent escape")]
#[test_case("ts/../../Cargo.toml" ; "nested parent escape")]
fn AssetStore___embedded___unresolvable_key_is_not_found(key: &str) {
    let store = AssetStore::embedded();

    let result = store.get(key);

    assert!(matches!(result, Err(AssetError::NotFound(_))));
    assert!(!store.contains(key));
}

#[test]
fn AssetStore___embedded___keys_cover_every_backend() {
    let keys = AssetStore::embedded().keys();

    for prefix in ["ts/", "echo/", "spring/", "php/"] {
        assert!(keys.iter().any(|k| k.starts_with(prefix)), "missing {prefix}");
    }
}

#[test]
fn AssetStore___from_dir___reads_live_files() {
    let dir = template_dir();
    let store = AssetStore::from_dir(dir.path());

    let text = store.get("ts/objs.ts.j2").unwrap();

    assert_eq!(&*text, "override {{ x }}");
    assert!(store.is_override());
}

#[test]
fn AssetStore___from_dir___sees_edits_without_restart() {
    let dir = template_dir();
    let store = AssetStore::from_dir(dir.path());
    store.get("ts/objs.ts.j2").unwrap();

    fs::write(dir.path().join("ts/objs.ts.j2"), "edited").unwrap();

    assert_eq!(&*store.get("ts/objs.ts.j2").unwrap(), "edited");
}

#[test]
fn AssetStore___from_dir___missing_file_is_not_found() {
    let dir = template_dir();
    let store = AssetStore::from_dir(dir.path());

    let result = store.get("ts/helper.ts.j2");

    assert_eq!(result, Err(AssetError::NotFound("ts/helper.ts.j2".to_string())));
}

#[test]
fn AssetStore___from_dir___directory_key_is_io_error() {
    let dir = template_dir();
    let store = AssetStore::from_dir(dir.path());

    let result = store.get("ts");

    assert!(matches!(result, Err(AssetError::Io { .. })));
}

#[test]
fn AssetStore___from_config___picks_mode_from_template_dir() {
    let mut config = GeneratorConfig::default();
    assert!(!AssetStore::from_config(&config).is_override());

    config.template_dir = Some(PathBuf::from("tpl"));
    assert!(AssetStore::from_config(&config).is_override());
}
