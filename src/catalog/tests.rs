use std::fs;

use tempfile::tempdir;

use super::*;
use crate::i18n::Language;

fn mp3_exts() -> Vec<String> {
    vec!["mp3".to_string()]
}

#[test]
fn every_category_has_three_tracks() {
    for cat in [
        CategoryKind::Sleep,
        CategoryKind::StressRelief,
        CategoryKind::Anxiety,
        CategoryKind::Focus,
        CategoryKind::Gratitude,
    ] {
        assert_eq!(tracks_for(cat).len(), 3, "category {cat:?}");
    }
}

#[test]
fn track_ids_are_unique_and_resolvable() {
    let all = super::data::all_tracks();
    for t in all {
        assert_eq!(track_by_id(t.id).map(|f| f.id), Some(t.id));
    }
    let mut ids: Vec<_> = all.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn track_text_follows_language() {
    let t = track_by_id("peaceful-drift").unwrap();
    assert_eq!(t.title(Language::En), "Peaceful Drift");
    assert_eq!(t.title(Language::Es), "Deriva Pacífica");
    assert_eq!(t.audio_file(Language::En), "peaceful-drift-en.mp3");
    assert_eq!(t.audio_file(Language::Es), "peaceful-drift-es.mp3");
}

#[test]
fn locate_prefers_category_path() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let nested = root.join("audio/meditations/sleep");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("peaceful-drift-en.mp3"), b"x").unwrap();
    fs::write(root.join("peaceful-drift-en.mp3"), b"x").unwrap();

    let found = locate_track(root, "sleep", "peaceful-drift-en.mp3", &mp3_exts()).unwrap();
    assert_eq!(found, nested.join("peaceful-drift-en.mp3"));
}

#[test]
fn locate_falls_back_to_alternate_nested_layout() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let alt = root.join("meditations/focus");
    fs::create_dir_all(&alt).unwrap();
    fs::write(alt.join("laser-focus-en.mp3"), b"x").unwrap();

    let found = locate_track(root, "focus", "laser-focus-en", &mp3_exts()).unwrap();
    assert_eq!(found, alt.join("laser-focus-en.mp3"));
}

#[test]
fn locate_falls_back_to_flat_root() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("quiet-center-en.mp3"), b"x").unwrap();

    let found = locate_track(root, "stress-relief", "quiet-center-en.mp3", &mp3_exts()).unwrap();
    assert_eq!(found, root.join("quiet-center-en.mp3"));
}

#[test]
fn locate_tries_every_configured_extension_per_tier() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let nested = root.join("audio/meditations/stress-relief");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("quiet-center-en.ogg"), b"x").unwrap();

    let exts = vec!["mp3".to_string(), "ogg".to_string()];
    let found = locate_track(root, "stress-relief", "quiet-center-en.mp3", &exts).unwrap();
    assert_eq!(found, nested.join("quiet-center-en.ogg"));
}

#[test]
fn locate_prefers_directory_tier_over_extension_order() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let nested = root.join("audio/meditations/sleep");
    fs::create_dir_all(&nested).unwrap();
    // The preferred tier only has the ogg; the flat root has the mp3.
    fs::write(nested.join("release-the-day-en.ogg"), b"x").unwrap();
    fs::write(root.join("release-the-day-en.mp3"), b"x").unwrap();

    let exts = vec!["mp3".to_string(), "ogg".to_string()];
    let found = locate_track(root, "sleep", "release-the-day-en.mp3", &exts).unwrap();
    assert_eq!(found, nested.join("release-the-day-en.ogg"));
}

#[test]
fn locate_scans_exhaustively_as_last_resort() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let odd = root.join("some/unrelated/dir");
    fs::create_dir_all(&odd).unwrap();
    fs::write(odd.join("remaster-grateful-heart-en.mp3"), b"x").unwrap();

    let found = locate_track(root, "gratitude", "grateful-heart-en.mp3", &mp3_exts()).unwrap();
    assert_eq!(found, odd.join("remaster-grateful-heart-en.mp3"));
}

#[test]
fn locate_reports_not_found_when_every_strategy_misses() {
    let dir = tempdir().unwrap();
    let err = locate_track(dir.path(), "sleep", "missing.mp3", &mp3_exts()).unwrap_err();
    assert!(matches!(err, LocateError::NotFound { .. }));
}

#[test]
fn locate_ambient_walks_its_own_chain() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    // Bundle stores the file with spaces instead of hyphens, at the root.
    fs::write(root.join("dream of light.mp3"), b"x").unwrap();
    let found = locate_ambient(root, "dream-of-light.mp3").unwrap();
    assert_eq!(found, root.join("dream of light.mp3"));

    // The dedicated subfolder wins once it exists.
    let sub = root.join("audio/background-sound");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("dream-of-light.mp3"), b"x").unwrap();
    let found = locate_ambient(root, "dream-of-light.mp3").unwrap();
    assert_eq!(found, sub.join("dream-of-light.mp3"));
}

#[test]
fn ambient_catalog_is_non_empty() {
    assert!(!ambient_tracks().is_empty());
}
