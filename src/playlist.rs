//! Background-music playlist and track selection.

use crate::rng::Rng;

/// Track files resolved relative to the page.
pub const TRACKS: [&str; 5] = ["luna.mp3", "ingle.mp3", "reik.mp3", "peso.mp3", "horas.mp3"];

/// Pick the next track uniformly at random, excluding `current` when the
/// playlist has more than one entry. A single-entry playlist always returns
/// that entry. One bounded draw, no rejection sampling.
pub fn next_track<'a>(tracks: &[&'a str], current: Option<&str>, rng: &mut Rng) -> &'a str {
    assert!(!tracks.is_empty(), "playlist must not be empty");
    if tracks.len() == 1 {
        return tracks[0];
    }
    match current.and_then(|c| tracks.iter().position(|t| *t == c)) {
        Some(cur) => {
            // Draw over the n-1 entries that are not the current one.
            let mut pick = rng.next_index(tracks.len() - 1);
            if pick >= cur {
                pick += 1;
            }
            tracks[pick]
        }
        // Current source is unknown or not from this playlist.
        None => tracks[rng.next_index(tracks.len())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_repeats_previous_track() {
        let mut rng = Rng::new(123);
        let mut current = TRACKS[0];
        for _ in 0..2_000 {
            let next = next_track(&TRACKS, Some(current), &mut rng);
            assert_ne!(next, current);
            current = next;
        }
    }

    #[test]
    fn single_entry_playlist_returns_it() {
        let mut rng = Rng::new(5);
        let tracks = ["only.mp3"];
        for _ in 0..10 {
            assert_eq!(next_track(&tracks, Some("only.mp3"), &mut rng), "only.mp3");
        }
    }

    #[test]
    fn unknown_current_draws_from_whole_list() {
        let mut rng = Rng::new(77);
        let mut seen = [false; TRACKS.len()];
        for _ in 0..1_000 {
            let t = next_track(&TRACKS, Some("not-in-playlist.mp3"), &mut rng);
            let idx = TRACKS.iter().position(|x| *x == t).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "every track should be reachable");
    }

    #[test]
    fn selection_is_roughly_uniform_over_alternatives() {
        let mut rng = Rng::new(31);
        let mut counts = [0u32; TRACKS.len()];
        let trials = 40_000;
        for _ in 0..trials {
            let t = next_track(&TRACKS, Some(TRACKS[2]), &mut rng);
            counts[TRACKS.iter().position(|x| *x == t).unwrap()] += 1;
        }
        assert_eq!(counts[2], 0);
        let expected = trials as f32 / (TRACKS.len() - 1) as f32;
        for (i, &c) in counts.iter().enumerate() {
            if i != 2 {
                let dev = (c as f32 - expected).abs() / expected;
                assert!(dev < 0.1, "track {i} count {c} deviates {dev}");
            }
        }
    }
}
