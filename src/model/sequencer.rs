//! Pure transition functions deciding which track plays next
//!
//! The controller applies the returned [`Step`]; nothing here touches the
//! engine or the UI.

use rand::Rng;

use super::playlist::Playlist;
use super::types::RepeatMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Select the index and start it
    Play(usize),
    /// Select the index but stay idle
    Park(usize),
    /// Nothing left to select
    Exhausted,
}

/// Next index with shuffle off.
pub fn next_sequential(len: usize, current: Option<usize>, repeat: RepeatMode) -> Step {
    if len == 0 {
        return Step::Exhausted;
    }

    if repeat == RepeatMode::One {
        return Step::Play(current.filter(|&i| i < len).unwrap_or(0));
    }

    let candidate = current.map(|i| i + 1).unwrap_or(0);
    if candidate < len {
        Step::Play(candidate)
    } else if repeat == RepeatMode::All {
        Step::Play(0)
    } else {
        Step::Park(0)
    }
}

/// Next index with shuffle on. The finished track is consumed.
pub fn next_shuffled<R: Rng + ?Sized>(
    playlist: &mut Playlist,
    current: Option<usize>,
    rng: &mut R,
) -> Step {
    if let Some(index) = current {
        playlist.remove(index);
    }

    if playlist.is_empty() {
        Step::Exhausted
    } else {
        Step::Play(rng.gen_range(0..playlist.len()))
    }
}

/// Previous index with shuffle off. Stepping back from the first track parks there.
pub fn previous(len: usize, current: Option<usize>) -> Step {
    if len == 0 {
        return Step::Exhausted;
    }

    match current {
        Some(index) if index > 0 && index <= len => Step::Play(index - 1),
        _ => Step::Park(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playlist(len: usize) -> Playlist {
        let mut playlist = Playlist::new();
        playlist.extend((0..len).map(|i| Track::new(format!("/music/{}.mp3", i))));
        playlist
    }

    #[test]
    fn sequential_walks_forward_then_parks() {
        assert_eq!(next_sequential(3, Some(0), RepeatMode::Off), Step::Play(1));
        assert_eq!(next_sequential(3, Some(1), RepeatMode::Off), Step::Play(2));
        assert_eq!(next_sequential(3, Some(2), RepeatMode::Off), Step::Park(0));
    }

    #[test]
    fn repeat_all_wraps_and_repeat_one_stays() {
        assert_eq!(next_sequential(3, Some(2), RepeatMode::All), Step::Play(0));
        assert_eq!(next_sequential(3, Some(1), RepeatMode::One), Step::Play(1));
    }

    #[test]
    fn no_selection_starts_from_the_top() {
        assert_eq!(next_sequential(2, None, RepeatMode::Off), Step::Play(0));
        assert_eq!(next_sequential(2, None, RepeatMode::One), Step::Play(0));
        assert_eq!(next_sequential(0, None, RepeatMode::All), Step::Exhausted);
    }

    #[test]
    fn previous_clamps_at_start() {
        assert_eq!(previous(3, Some(2)), Step::Play(1));
        assert_eq!(previous(3, Some(0)), Step::Park(0));
        assert_eq!(previous(3, None), Step::Park(0));
        assert_eq!(previous(0, Some(0)), Step::Exhausted);
    }

    #[test]
    fn shuffle_consumes_the_finished_track() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut list = playlist(3);

        let step = next_shuffled(&mut list, Some(1), &mut rng);

        assert_eq!(list.len(), 2);
        assert!(!list.locators().contains(&"/music/1.mp3".to_string()));
        assert!(matches!(step, Step::Play(i) if i < 2));
    }

    #[test]
    fn shuffle_on_last_track_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut list = playlist(1);
        assert_eq!(next_shuffled(&mut list, Some(0), &mut rng), Step::Exhausted);
        assert!(list.is_empty());
    }
}
