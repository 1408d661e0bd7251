// hanzi-pinyin/src/style.rs
//
// Output styles and the style renderer. Rendering is a pure string
// transformation of a raw dictionary reading: a per-character pass over the
// phonetic-symbol alphabet, an optional tone-digit relocation, then final
// extraction for the finals-only styles.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::syllable;
use crate::tone;

/// How a reading is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Style {
    /// Toneless ASCII, e.g. `zhong`.
    Normal,
    /// Diacritic form as stored in the dictionary, e.g. `zhōng`.
    #[default]
    Tone,
    /// Tone digit directly after the marked vowel, e.g. `zho1ng`.
    Tone2,
    /// Tone digit at the end of the syllable, e.g. `zhong1`.
    Tone3,
    /// Initial only, empty for syllables without one.
    Initials,
    /// First letter of the `Normal` rendering.
    FirstLetter,
    /// Corrected final only, toneless, e.g. `ong`.
    Finals,
    /// Final with diacritic, e.g. `ōng`.
    FinalsTone,
    /// Final with the digit after the marked vowel, e.g. `o1ng`.
    FinalsTone2,
    /// Final with the digit at the end, e.g. `ong1`.
    FinalsTone3,
}

enum ToneMarking {
    Stripped,
    Digit,
    Mark,
}

impl Style {
    fn marking(self) -> ToneMarking {
        match self {
            Style::Normal | Style::FirstLetter | Style::Finals => ToneMarking::Stripped,
            Style::Tone2 | Style::Tone3 | Style::FinalsTone2 | Style::FinalsTone3 => {
                ToneMarking::Digit
            }
            Style::Tone | Style::FinalsTone | Style::Initials => ToneMarking::Mark,
        }
    }

    fn finals_only(self) -> bool {
        matches!(
            self,
            Style::Finals | Style::FinalsTone | Style::FinalsTone2 | Style::FinalsTone3
        )
    }
}

// Moves an in-syllable tone digit to the end: zho1ng -> zhong1. Digit styles
// only ever leave ASCII letters behind, and a neutral-tone syllable carries
// no digit at all, so a non-match passes through unchanged.
static TONE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-z]+)([1-4])([a-z]*)$").expect("tone suffix pattern"));

/// Render one raw reading in the requested style. Pure function; the reading
/// must be in the dictionary's diacritic alphabet.
pub fn render(reading: &str, style: Style) -> String {
    if style == Style::Initials {
        return syllable::initial_of(reading).to_string();
    }

    let mut out = String::with_capacity(reading.len() + 1);
    for c in reading.chars() {
        match tone::split_symbol(c) {
            Some((base, t)) => match style.marking() {
                ToneMarking::Stripped => out.push(base),
                ToneMarking::Digit => {
                    out.push(base);
                    // digit 0 is never emitted
                    if t > 0 {
                        out.push((b'0' + t) as char);
                    }
                }
                ToneMarking::Mark => out.push(c),
            },
            None => out.push(c),
        }
    }

    if matches!(style, Style::Tone3 | Style::FinalsTone3) {
        out = TONE_SUFFIX.replace(&out, "$1$3$2").into_owned();
    }

    if style == Style::FirstLetter {
        return out.chars().take(1).collect();
    }
    if style.finals_only() {
        // Bare nasals have no initial to strip and no vowel to correct.
        if syllable::is_nasal(reading) {
            return out;
        }
        return syllable::final_from(&out);
    }
    out
}
