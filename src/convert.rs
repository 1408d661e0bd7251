// hanzi-pinyin/src/convert.rs
//
// The resolution engine and its output assemblers. A stateless per-character
// fold over the input: dictionary hit -> render the selected readings,
// dictionary miss -> defer to the caller's fallback, empty fallback result
// -> the character contributes nothing.

use tracing::trace;

use crate::config::Args;
use crate::dict;
use crate::style;

/// Convert `text` to the full candidate matrix: one outer entry per surviving
/// character in input order, one inner entry per selected reading.
///
/// With `heteronym` off only the primary (first) dictionary reading is kept;
/// with it on every reading is rendered, in dictionary order. Characters
/// without a dictionary entry go through `args.fallback`; when that yields
/// nothing the character is silently dropped, so the output may be shorter
/// than the input.
pub fn pinyin(text: &str, args: &Args) -> Vec<Vec<String>> {
    let mut matrix = Vec::new();
    for ch in text.chars() {
        if let Some(readings) = dict::readings(ch) {
            let take = if args.heteronym { readings.len() } else { 1 };
            matrix.push(
                readings
                    .into_iter()
                    .take(take)
                    .map(|r| style::render(r, args.style))
                    .collect(),
            );
        } else {
            let candidates = match args.fallback {
                Some(fallback) => fallback(ch, args),
                None => Vec::new(),
            };
            if candidates.is_empty() {
                trace!(codepoint = %ch.escape_unicode(), "not in dictionary, dropped");
                continue;
            }
            matrix.push(candidates);
        }
    }
    matrix
}

/// Convert `text` to one rendering per surviving character: the primary
/// reading, or the first fallback candidate. Heteronym mode is ignored here.
pub fn lazy_pinyin(text: &str, args: &Args) -> Vec<String> {
    let mut args = args.clone();
    args.heteronym = false;
    pinyin(text, &args)
        .into_iter()
        .filter_map(|mut candidates| {
            if candidates.is_empty() {
                None
            } else {
                Some(candidates.remove(0))
            }
        })
        .collect()
}

/// Convert `text` and join the primary renderings with `args.separator`.
pub fn slug(text: &str, args: &Args) -> String {
    lazy_pinyin(text, args).join(&args.separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    #[test]
    fn non_hanzi_is_dropped_without_fallback() {
        assert_eq!(pinyin("abc, 123!", &Args::default()), Vec::<Vec<String>>::new());
        assert_eq!(lazy_pinyin("abc", &Args::default()), Vec::<String>::new());
    }

    #[test]
    fn lazy_ignores_heteronym() {
        let args = Args {
            style: Style::Normal,
            heteronym: true,
            ..Args::default()
        };
        assert_eq!(lazy_pinyin("中", &args), vec!["zhong"]);
    }

    #[test]
    fn heteronym_yields_every_reading() {
        let args = Args {
            style: Style::Normal,
            heteronym: true,
            ..Args::default()
        };
        // 单 has three dictionary readings
        assert_eq!(pinyin("单", &args), vec![vec!["dan", "shan", "chan"]]);
        assert_eq!(pinyin("单", &Args { heteronym: false, ..args }).len(), 1);
    }

    #[test]
    fn fallback_sees_current_args() {
        fn style_aware(_: char, args: &Args) -> Vec<String> {
            vec![format!("{:?}", args.style)]
        }
        let args = Args {
            style: Style::FirstLetter,
            fallback: Some(style_aware),
            ..Args::default()
        };
        assert_eq!(pinyin("a", &args), vec![vec!["FirstLetter"]]);
    }
}
