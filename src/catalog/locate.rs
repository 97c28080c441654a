//! Resource location with ordered fallback search.
//!
//! Audio files are located by a folder-per-category convention under the
//! assets root. Installations differ (some nest an extra `audio/` level, some
//! are flat), so lookup walks an ordered list of strategies and takes the
//! first hit. Misses are logged at debug so a broken layout can be diagnosed
//! without crashing playback.

use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("audio file not found: {file_name} (searched under {root})")]
    NotFound { file_name: String, root: String },
}

/// Strip a trailing audio extension if the caller included one. `mp3` is
/// always recognized; `extensions` adds the configured formats.
fn stem_of<'a>(file_name: &'a str, extensions: &[String]) -> &'a str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && is_audio_extension(ext, extensions) => stem,
        _ => file_name,
    }
}

fn is_audio_extension(ext: &str, extensions: &[String]) -> bool {
    ext.eq_ignore_ascii_case("mp3")
        || extensions
            .iter()
            .any(|e| e.trim().trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// Candidate file names for a stem, one per configured extension.
fn file_names(stem: &str, extensions: &[String]) -> Vec<String> {
    let mut names: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .map(|e| format!("{stem}.{}", e.to_ascii_lowercase()))
        .collect();
    if names.is_empty() {
        names.push(format!("{stem}.mp3"));
    }
    names
}

fn has_audio_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| is_audio_extension(ext, extensions))
        .unwrap_or(false)
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    for c in candidates {
        if c.is_file() {
            return Some(c.clone());
        }
        debug!("asset lookup miss: {}", c.display());
    }
    None
}

/// Exhaustive scan: walk the root for a file whose stem contains `stem` and
/// whose extension is one of the configured audio extensions.
fn scan_for_stem(root: &Path, stem: &str, extensions: &[String]) -> Option<PathBuf> {
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if !path.is_file() || !has_audio_extension(path, extensions) {
            continue;
        }
        let found = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.contains(stem))
            .unwrap_or(false);
        if found {
            return Some(path.to_path_buf());
        }
    }
    None
}

/// Locate a meditation track.
///
/// Fallback order:
/// 1. `<root>/audio/meditations/<category>/<file>`
/// 2. `<root>/meditations/<category>/<file>`
/// 3. `<root>/<file>`
/// 4. exhaustive scan of the root by file stem
pub fn locate_track(
    root: &Path,
    category_folder: &str,
    file_name: &str,
    extensions: &[String],
) -> Result<PathBuf, LocateError> {
    let stem = stem_of(file_name, extensions);
    let names = file_names(stem, extensions);

    // Each directory tier tries every configured extension before the
    // search moves on to the next tier.
    let dirs = [
        root.join("audio").join("meditations").join(category_folder),
        root.join("meditations").join(category_folder),
        root.to_path_buf(),
    ];
    for dir in &dirs {
        let candidates: Vec<PathBuf> = names.iter().map(|n| dir.join(n)).collect();
        if let Some(found) = first_existing(&candidates) {
            return Ok(found);
        }
    }

    if let Some(found) = scan_for_stem(root, stem, extensions) {
        return Ok(found);
    }

    Err(LocateError::NotFound {
        file_name: file_name.to_string(),
        root: root.display().to_string(),
    })
}

/// Locate an ambient bed.
///
/// Fallback order: ambient subfolder, parent audio folder, assets root, then
/// filename variants (spaces for hyphens and vice versa) across the same
/// three directories.
pub fn locate_ambient(root: &Path, file_name: &str) -> Result<PathBuf, LocateError> {
    let stem = stem_of(file_name, &[]);

    let variants = [
        format!("{stem}.mp3"),
        format!("{}.mp3", stem.replace('-', " ")),
        format!("{}.mp3", stem.replace(' ', "-")),
    ];

    for variant in &variants {
        let candidates = [
            root.join("audio").join("background-sound").join(variant),
            root.join("audio").join(variant),
            root.join(variant),
        ];
        if let Some(found) = first_existing(&candidates) {
            return Ok(found);
        }
    }

    Err(LocateError::NotFound {
        file_name: file_name.to_string(),
        root: root.display().to_string(),
    })
}
