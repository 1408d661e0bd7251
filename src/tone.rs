// hanzi-pinyin/src/tone.rs
//
// Tone/final tables.
// - Phonetic-symbol alphabet: every diacritic-marked vowel used by dictionary
//   readings, plus the bare nasal syllables (ń, ḿ, ...).
// - Canonical finals table crossed with tones 1-4 and the toneless form,
//   with O(1) lookup in both directions.

use once_cell::sync::Lazy;
use phf::phf_map;
use std::collections::HashMap;

/// Diacritic character -> toneless base letter plus optional tone digit.
///
/// This is the alphabet the dictionary readings are written in. The `ü`
/// family maps to the letter `v` (the conventional ASCII spelling), and the
/// bare nasals carry their tone with no vowel at all.
static PHONETIC_SYMBOLS: phf::Map<char, &'static str> = phf_map! {
    'ā' => "a1", 'á' => "a2", 'ǎ' => "a3", 'à' => "a4",
    'ō' => "o1", 'ó' => "o2", 'ǒ' => "o3", 'ò' => "o4",
    'ē' => "e1", 'é' => "e2", 'ě' => "e3", 'è' => "e4",
    'ī' => "i1", 'í' => "i2", 'ǐ' => "i3", 'ì' => "i4",
    'ū' => "u1", 'ú' => "u2", 'ǔ' => "u3", 'ù' => "u4",
    'ü' => "v", 'ǖ' => "v1", 'ǘ' => "v2", 'ǚ' => "v3", 'ǜ' => "v4",
    'ń' => "n2", 'ň' => "n3", 'ǹ' => "n4",
    'ḿ' => "m2",
};

/// The canonical finals set: simple vowels (with `v` for `ü`), diphthongs,
/// `er`, and the nasal codas.
pub const FINALS: &[&str] = &[
    "a", "o", "e", "i", "u", "v",
    "ai", "ei", "ui", "ao", "ou", "iu",
    "ie", "ue", "er",
    "an", "en", "in", "un",
    "ang", "eng", "ing", "ong",
];

/// Which vowel carries the tone mark in a multi-vowel final. The first vowel
/// of this list present in the final receives the diacritic, so `iu` marks
/// the `i` and `ui` marks the `i` as well.
const MARK_PRIORITY: &[char] = &['a', 'o', 'e', 'i', 'u', 'ü'];

const TONED_VOWELS: &[(char, [char; 4])] = &[
    ('a', ['ā', 'á', 'ǎ', 'à']),
    ('o', ['ō', 'ó', 'ǒ', 'ò']),
    ('e', ['ē', 'é', 'ě', 'è']),
    ('i', ['ī', 'í', 'ǐ', 'ì']),
    ('u', ['ū', 'ú', 'ǔ', 'ù']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
];

fn toned(vowel: char, tone: u8) -> char {
    TONED_VOWELS
        .iter()
        .find(|(v, _)| *v == vowel)
        .map(|(_, forms)| forms[(tone - 1) as usize])
        .unwrap_or(vowel)
}

/// Split a single diacritic character into its base letter and tone number.
/// Returns `None` for characters outside the phonetic-symbol alphabet.
pub fn split_symbol(c: char) -> Option<(char, u8)> {
    let entry = PHONETIC_SYMBOLS.get(&c)?;
    let mut chars = entry.chars();
    let base = chars.next().unwrap_or(c);
    let tone = chars
        .next()
        .and_then(|d| d.to_digit(10))
        .unwrap_or(0) as u8;
    Some((base, tone))
}

/// Render a toneless final spelling with the given tone as its diacritic
/// form, e.g. `("an", 1)` -> `"ān"`, `("v", 4)` -> `"ǜ"`, `("ue", 1)` ->
/// `"üē"`. Tone 0 renders the base form with no mark.
pub fn diacritic_for(final_spelling: &str, tone: u8) -> String {
    // "ue"/"ve" both name the ü+e final; elsewhere `v` is ü itself.
    let base: String = match final_spelling {
        "ue" | "ve" => "üe".to_string(),
        other => other.chars().map(|c| if c == 'v' { 'ü' } else { c }).collect(),
    };
    if !(1..=4).contains(&tone) {
        return base;
    }
    for &vowel in MARK_PRIORITY {
        if let Some(idx) = base.find(vowel) {
            let mut out = String::with_capacity(base.len() + 2);
            out.push_str(&base[..idx]);
            out.push(toned(vowel, tone));
            out.push_str(&base[idx + vowel.len_utf8()..]);
            return out;
        }
    }
    base
}

/// Reverse table: diacritic fragment -> (canonical final spelling, tone).
/// Built once from `FINALS` x tones, so it is the exact inverse of
/// `diacritic_for` over the canonical set.
static FINALS_BY_DIACRITIC: Lazy<HashMap<String, (&'static str, u8)>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for &f in FINALS {
        for tone in 0..=4 {
            m.insert(diacritic_for(f, tone), (f, tone));
        }
    }
    m
});

/// Decompose a diacritic final fragment back into its canonical spelling and
/// tone number. Only fragments produced from the canonical finals set
/// resolve; anything else returns `None`.
pub fn split_final(fragment: &str) -> Option<(&'static str, u8)> {
    FINALS_BY_DIACRITIC.get(fragment).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_canonical_finals() {
        for &f in FINALS {
            for tone in 0..=4 {
                let marked = diacritic_for(f, tone);
                assert_eq!(
                    split_final(&marked),
                    Some((f, tone)),
                    "round trip failed for {f}/{tone} via {marked}"
                );
            }
        }
    }

    #[test]
    fn mark_placement_priority() {
        // a > o > e > i > u > ü, first match wins
        assert_eq!(diacritic_for("ao", 4), "ào");
        assert_eq!(diacritic_for("ou", 1), "ōu");
        assert_eq!(diacritic_for("iu", 1), "īu");
        assert_eq!(diacritic_for("ui", 1), "uī");
        assert_eq!(diacritic_for("ue", 1), "üē");
        assert_eq!(diacritic_for("v", 1), "ǖ");
        assert_eq!(diacritic_for("ong", 3), "ǒng");
    }

    #[test]
    fn toneless_form_has_no_mark() {
        assert_eq!(diacritic_for("an", 0), "an");
        assert_eq!(diacritic_for("v", 0), "ü");
    }

    #[test]
    fn symbol_decomposition() {
        assert_eq!(split_symbol('ō'), Some(('o', 1)));
        assert_eq!(split_symbol('ǜ'), Some(('v', 4)));
        assert_eq!(split_symbol('ü'), Some(('v', 0)));
        assert_eq!(split_symbol('ń'), Some(('n', 2)));
        assert_eq!(split_symbol('ḿ'), Some(('m', 2)));
        assert_eq!(split_symbol('a'), None);
        assert_eq!(split_symbol('中'), None);
    }
}
