//! Built-in default sound set
//!
//! Shown on first launch, after a reset, and whenever the persisted library
//! cannot be restored. All clips are remote pronunciation samples, so the
//! defaults need nothing from the blob store.

use crate::types::{DefaultIcon, Sound, SoundId};

/// Names and clip URLs of the built-in board
const DEFAULT_CLIPS: &[(&str, &str)] = &[
    (
        "You're welcome",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/3/36/En-uk-you%27re_welcome.ogg/En-uk-you%27re_welcome.ogg.mp3",
    ),
    (
        "to love",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/e/e7/En-uk-to_love.ogg/En-uk-to_love.ogg.mp3",
    ),
    (
        "society",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/5/52/En-uk-society.ogg/En-uk-society.ogg.mp3",
    ),
    (
        "hello",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/4/48/En-uk-hello.ogg/En-uk-hello.ogg.mp3",
    ),
    (
        "nice to meet you",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/6/62/En-uk-nice_to_meet_you.ogg/En-uk-nice_to_meet_you.ogg.mp3",
    ),
    (
        "beautiful",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/e/ea/En-uk-beautiful.ogg/En-uk-beautiful.ogg.mp3",
    ),
    (
        "potato",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/f/ff/En-uk-potato.ogg/En-uk-potato.ogg.mp3",
    ),
    (
        "bicycle",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/9/93/En-uk-a_bicycle.ogg/En-uk-a_bicycle.ogg.mp3",
    ),
    (
        "amphitheater",
        "https://upload.wikimedia.org/wikipedia/commons/transcoded/c/cc/En-uk-amphitheatre.ogg/En-uk-amphitheatre.ogg.mp3",
    ),
];

/// Build the default sound list, icons cycling through the default set
pub fn default_sounds() -> Vec<Sound> {
    DEFAULT_CLIPS
        .iter()
        .enumerate()
        .map(|(index, (name, url))| {
            Sound::remote(
                SoundId::new(format!("default-{index}")),
                *name,
                *url,
                DefaultIcon::for_index(index),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonFace;

    #[test]
    fn defaults_are_remote_with_cycling_icons() {
        let sounds = default_sounds();
        assert_eq!(sounds.len(), 9);
        for (index, sound) in sounds.iter().enumerate() {
            assert!(sound.playable_url.starts_with("https://"));
            assert_eq!(
                sound.face,
                ButtonFace::Icon(DefaultIcon::for_index(index))
            );
        }
        // Icons wrap after the sixth entry
        assert_eq!(sounds[6].face, sounds[0].face);
    }
}
