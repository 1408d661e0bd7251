// hanzi-pinyin/src/syllable.rs
//
// Syllable decomposition: initial/final/tone split with the orthographic
// corrections for syllables spelled with y/w and for u after j/q/x.

use crate::tone;

/// The valid pinyin initials, two-letter clusters first so prefix matching
/// takes the longest. `y` and `w` are spelling artifacts, not initials; they
/// are absorbed into the final by `final_from`.
pub const INITIALS: &[&str] = &[
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h",
    "j", "q", "x", "r", "z", "c", "s",
];

/// A reading split into its linguistic parts. The final is spelled in its
/// corrected form (`yuan` -> `van`, `ju` -> initial `j` + final `v`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub initial: &'static str,
    pub final_part: String,
    /// 1-4, or 0 for a neutral-tone reading with no diacritic.
    pub tone: u8,
}

/// Longest initial prefix of a spelling, or `""` when the syllable opens with
/// a vowel or with y/w. Initials are plain ASCII, so this works on raw
/// diacritic readings and style-converted spellings alike.
pub fn initial_of(spelling: &str) -> &'static str {
    INITIALS
        .iter()
        .copied()
        .find(|i| spelling.starts_with(i))
        .unwrap_or("")
}

/// True for the bare nasal syllables (ń, ň, ǹ, ḿ) which have no vowel final
/// and never go through initial stripping.
pub fn is_nasal(reading: &str) -> bool {
    matches!(reading.chars().next(), Some('ḿ' | 'ń' | 'ň' | 'ǹ'))
}

/// Strip the tone from a raw reading, returning the toneless spelling and the
/// tone number (0 when no character carries a mark). `ü` becomes `v`.
pub fn split_tone(reading: &str) -> (String, u8) {
    let mut tone = 0;
    let spelling = reading
        .chars()
        .map(|c| match tone::split_symbol(c) {
            Some((base, t)) => {
                if t > 0 {
                    tone = t;
                }
                base
            }
            None => c,
        })
        .collect();
    (spelling, tone)
}

/// Extract the corrected final from a spelling (toneless, digit-toned or
/// diacritic alike). Applies the y/w rules when there is no initial and the
/// u -> v correction after j/q/x.
pub fn final_from(spelling: &str) -> String {
    let initial = initial_of(spelling);
    if initial.is_empty() {
        return correct_yw(spelling);
    }
    let rest = &spelling[initial.len()..];
    if matches!(initial, "j" | "q" | "x") {
        return correct_jqx(rest);
    }
    rest.to_string()
}

// y/w are not initials: yu -> v, yi -> i, y -> i, wu -> u, w -> u.
fn correct_yw(spelling: &str) -> String {
    if let Some(rest) = spelling.strip_prefix("yu") {
        format!("v{rest}")
    } else if let Some(rest) = spelling.strip_prefix("yi") {
        format!("i{rest}")
    } else if let Some(rest) = spelling.strip_prefix('y') {
        format!("i{rest}")
    } else if let Some(rest) = spelling.strip_prefix("wu") {
        format!("u{rest}")
    } else if let Some(rest) = spelling.strip_prefix('w') {
        format!("u{rest}")
    } else {
        spelling.to_string()
    }
}

// After j/q/x the spelled u is linguistically ü, in whatever form the style
// conversion left it in.
fn correct_jqx(rest: &str) -> String {
    let (head, mapped) = match rest.chars().next() {
        Some('u') => ('u', 'v'),
        Some('ū') => ('ū', 'ǖ'),
        Some('ú') => ('ú', 'ǘ'),
        Some('ǔ') => ('ǔ', 'ǚ'),
        Some('ù') => ('ù', 'ǜ'),
        _ => return rest.to_string(),
    };
    let mut out = String::with_capacity(rest.len() + 1);
    out.push(mapped);
    out.push_str(&rest[head.len_utf8()..]);
    out
}

/// Decompose a raw dictionary reading into initial, corrected final and tone.
pub fn decompose(reading: &str) -> Syllable {
    let (toneless, tone) = split_tone(reading);
    if is_nasal(reading) {
        return Syllable {
            initial: "",
            final_part: toneless,
            tone,
        };
    }
    Syllable {
        initial: initial_of(reading),
        final_part: final_from(&toneless),
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(initial: &'static str, final_part: &str, tone: u8) -> Syllable {
        Syllable {
            initial,
            final_part: final_part.to_string(),
            tone,
        }
    }

    #[test]
    fn plain_initials_and_finals() {
        assert_eq!(decompose("zhōng"), syl("zh", "ong", 1));
        assert_eq!(decompose("guó"), syl("g", "uo", 2));
        assert_eq!(decompose("rén"), syl("r", "en", 2));
        assert_eq!(final_from("an"), "an");
    }

    #[test]
    fn two_letter_initials_match_before_single() {
        assert_eq!(initial_of("zhong"), "zh");
        assert_eq!(initial_of("chū"), "ch");
        assert_eq!(initial_of("shi"), "sh");
        assert_eq!(initial_of("zi"), "z");
    }

    #[test]
    fn y_and_w_are_not_initials() {
        assert_eq!(decompose("yú"), syl("", "v", 2));
        assert_eq!(decompose("yuán"), syl("", "van", 2));
        assert_eq!(decompose("yuè"), syl("", "ve", 4));
        assert_eq!(decompose("ya"), syl("", "ia", 0));
        assert_eq!(decompose("yī"), syl("", "i", 1));
        assert_eq!(decompose("yǐng"), syl("", "ing", 3));
        assert_eq!(decompose("wú"), syl("", "u", 2));
        assert_eq!(decompose("wàn"), syl("", "uan", 4));
    }

    #[test]
    fn u_after_jqx_is_v() {
        assert_eq!(decompose("jù"), syl("j", "v", 4));
        assert_eq!(decompose("qǔ"), syl("q", "v", 3));
        assert_eq!(decompose("xú"), syl("x", "v", 2));
        assert_eq!(decompose("jūn"), syl("j", "vn", 1));
        // ü spelled directly stays v
        assert_eq!(decompose("lüè"), syl("l", "ve", 4));
        assert_eq!(decompose("nǚ"), syl("n", "v", 3));
    }

    #[test]
    fn bare_nasal_syllables() {
        assert_eq!(decompose("ń"), syl("", "n", 2));
        assert_eq!(decompose("ḿ"), syl("", "m", 2));
        assert_eq!(initial_of("ń"), "");
    }

    #[test]
    fn neutral_tone_is_zero() {
        assert_eq!(decompose("ma").tone, 0);
        assert_eq!(decompose("de").tone, 0);
    }
}
