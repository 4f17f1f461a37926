use cadence::model::sequencer::{self, Step};
use cadence::model::{Playlist, RepeatMode, Track};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn playlist_of(len: usize) -> Playlist {
    let mut playlist = Playlist::new();
    playlist.extend((0..len).map(|i| Track::new(format!("/music/{}.mp3", i))));
    playlist
}

proptest! {
    #[test]
    fn repeat_all_cycles_modulo_length(len in 1usize..50, start in 0usize..50) {
        let start = start % len;
        let mut current = Some(start);
        for step in 1..=len {
            match sequencer::next_sequential(len, current, RepeatMode::All) {
                Step::Play(index) => {
                    prop_assert_eq!(index, (start + step) % len);
                    current = Some(index);
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
        prop_assert_eq!(current, Some(start));
    }

    #[test]
    fn repeat_off_visits_each_track_once(len in 1usize..50) {
        let mut current = Some(0);
        let mut played = 1;
        while let Step::Play(index) = sequencer::next_sequential(len, current, RepeatMode::Off) {
            current = Some(index);
            played += 1;
        }
        prop_assert_eq!(played, len);
        prop_assert_eq!(
            sequencer::next_sequential(len, current, RepeatMode::Off),
            Step::Park(0)
        );
    }

    #[test]
    fn shuffle_shrinks_by_one_and_stays_in_range(len in 1usize..40, seed in any::<u64>()) {
        let mut playlist = playlist_of(len);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut current = Some(0);

        for remaining in (0..len).rev() {
            let step = sequencer::next_shuffled(&mut playlist, current, &mut rng);
            prop_assert_eq!(playlist.len(), remaining);
            match step {
                Step::Play(index) => {
                    prop_assert!(index < remaining);
                    current = Some(index);
                }
                Step::Exhausted => prop_assert_eq!(remaining, 0),
                Step::Park(_) => prop_assert!(false, "shuffle never parks"),
            }
        }
    }

    #[test]
    fn previous_never_leaves_the_playlist(len in 1usize..50, current in 0usize..50) {
        match sequencer::previous(len, Some(current % len)) {
            Step::Play(index) => prop_assert_eq!(index + 1, current % len),
            Step::Park(index) => {
                prop_assert_eq!(index, 0);
                prop_assert_eq!(current % len, 0);
            }
            Step::Exhausted => prop_assert!(false, "non-empty playlist"),
        }
    }
}
