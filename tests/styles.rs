// Style rendering acceptance table, exercised through the full conversion
// pipeline one character at a time. Covers the y/w/v orthographic
// corrections, u -> v after j/q/x, the bare nasal syllables, and neutral-tone
// digit suppression.

use hanzi_pinyin::{pinyin, Args, Style};

fn check(cases: &[(&str, Style, &[&[&str]])]) {
    for (hans, style, expected) in cases {
        let args = Args {
            style: *style,
            ..Args::default()
        };
        let got = pinyin(hans, &args);
        let want: Vec<Vec<String>> = expected
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect();
        assert_eq!(got, want, "{hans} with {style:?}");
    }
}

#[test]
fn yu_is_a_final_not_an_initial() {
    check(&[
        ("鱼", Style::Tone2, &[&["yu2"]]),
        ("鱼", Style::Tone3, &[&["yu2"]]),
        ("鱼", Style::Finals, &[&["v"]]),
        ("雨", Style::Tone2, &[&["yu3"]]),
        ("雨", Style::Tone3, &[&["yu3"]]),
        ("雨", Style::Finals, &[&["v"]]),
        ("元", Style::Tone2, &[&["yua2n"]]),
        ("元", Style::Tone3, &[&["yuan2"]]),
        ("元", Style::Finals, &[&["van"]]),
    ]);
}

#[test]
fn y_and_w_are_spelling_artifacts() {
    check(&[
        ("呀", Style::Initials, &[&[""]]),
        ("呀", Style::Tone2, &[&["ya"]]),
        ("呀", Style::Tone3, &[&["ya"]]),
        ("呀", Style::Finals, &[&["ia"]]),
        ("无", Style::Initials, &[&[""]]),
        ("无", Style::Tone2, &[&["wu2"]]),
        ("无", Style::Tone3, &[&["wu2"]]),
        ("无", Style::Finals, &[&["u"]]),
        ("衣", Style::Tone2, &[&["yi1"]]),
        ("衣", Style::Tone3, &[&["yi1"]]),
        ("衣", Style::Finals, &[&["i"]]),
        ("万", Style::Tone2, &[&["wa4n"]]),
        ("万", Style::Tone3, &[&["wan4"]]),
        ("万", Style::Finals, &[&["uan"]]),
    ]);
}

#[test]
fn u_after_jqx_renders_as_v() {
    check(&[
        ("具", Style::FinalsTone, &[&["ǜ"]]),
        ("具", Style::FinalsTone2, &[&["v4"]]),
        ("具", Style::FinalsTone3, &[&["v4"]]),
        ("具", Style::Finals, &[&["v"]]),
        ("取", Style::FinalsTone, &[&["ǚ"]]),
        ("取", Style::FinalsTone2, &[&["v3"]]),
        ("取", Style::FinalsTone3, &[&["v3"]]),
        ("取", Style::Finals, &[&["v"]]),
        ("徐", Style::FinalsTone, &[&["ǘ"]]),
        ("徐", Style::FinalsTone2, &[&["v2"]]),
        ("徐", Style::FinalsTone3, &[&["v2"]]),
        ("徐", Style::Finals, &[&["v"]]),
    ]);
}

#[test]
fn bare_nasal_n() {
    check(&[
        ("嗯", Style::Normal, &[&["n"]]),
        ("嗯", Style::Tone, &[&["ń"]]),
        ("嗯", Style::Tone2, &[&["n2"]]),
        ("嗯", Style::Tone3, &[&["n2"]]),
        ("嗯", Style::Initials, &[&[""]]),
        ("嗯", Style::FirstLetter, &[&["n"]]),
        ("嗯", Style::Finals, &[&["n"]]),
        ("嗯", Style::FinalsTone, &[&["ń"]]),
        ("嗯", Style::FinalsTone2, &[&["n2"]]),
        ("嗯", Style::FinalsTone3, &[&["n2"]]),
    ]);
}

#[test]
fn bare_nasal_m() {
    check(&[
        ("呣", Style::Normal, &[&["m"]]),
        ("呣", Style::Tone, &[&["ḿ"]]),
        ("呣", Style::Tone2, &[&["m2"]]),
        ("呣", Style::Tone3, &[&["m2"]]),
        ("呣", Style::Initials, &[&[""]]),
        ("呣", Style::FirstLetter, &[&["m"]]),
        ("呣", Style::Finals, &[&["m"]]),
        ("呣", Style::FinalsTone, &[&["ḿ"]]),
        ("呣", Style::FinalsTone2, &[&["m2"]]),
        ("呣", Style::FinalsTone3, &[&["m2"]]),
    ]);
}

#[test]
fn neutral_tone_never_emits_a_digit() {
    check(&[
        ("啊", Style::Tone2, &[&["a"]]),
        ("啊", Style::Tone3, &[&["a"]]),
        ("侵略", Style::Tone2, &[&["qi1n"], &["lve4"]]),
        ("侵略", Style::FinalsTone2, &[&["i1n"], &["ve4"]]),
        ("侵略", Style::FinalsTone3, &[&["in1"], &["ve4"]]),
    ]);
}
