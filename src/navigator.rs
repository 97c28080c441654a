//! Next/previous track computation within a category's ordered list.
//!
//! Lists are small (under 20 entries), so the index is recomputed by linear
//! search on identifier equality each call instead of caching.

use crate::catalog::Track;

pub fn position(tracks: &[&Track], current_id: &str) -> Option<usize> {
    tracks.iter().position(|t| t.id == current_id)
}

pub fn has_next(tracks: &[&Track], current_id: &str) -> bool {
    match position(tracks, current_id) {
        Some(i) => i + 1 < tracks.len(),
        None => false,
    }
}

pub fn has_previous(tracks: &[&Track], current_id: &str) -> bool {
    matches!(position(tracks, current_id), Some(i) if i > 0)
}

pub fn next<'a>(tracks: &[&'a Track], current_id: &str) -> Option<&'a Track> {
    let i = position(tracks, current_id)?;
    tracks.get(i + 1).copied()
}

pub fn previous<'a>(tracks: &[&'a Track], current_id: &str) -> Option<&'a Track> {
    let i = position(tracks, current_id)?;
    if i == 0 {
        return None;
    }
    tracks.get(i - 1).copied()
}
