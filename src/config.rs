// hanzi-pinyin/src/config.rs
//
// Per-call conversion options. Passed by reference to every conversion entry
// point; no shared mutable state.

use crate::style::Style;

/// Caller-supplied handler for characters absent from the dictionary.
///
/// Receives the unresolved character and the active options, and returns the
/// candidate list for that character. An empty result drops the character
/// from the output entirely.
pub type Fallback = fn(char, &Args) -> Vec<String>;

/// Conversion options.
#[derive(Clone)]
pub struct Args {
    /// Output style, `Style::Tone` by default.
    pub style: Style,
    /// Emit every dictionary reading per character instead of only the
    /// primary one.
    pub heteronym: bool,
    /// Separator used by `slug`. May be empty.
    pub separator: String,
    /// Handler for non-hanzi input; `None` drops such characters.
    pub fallback: Option<Fallback>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            style: Style::default(),
            heteronym: false,
            separator: "-".to_string(),
            fallback: None,
        }
    }
}

impl std::fmt::Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Args")
            .field("style", &self.style)
            .field("heteronym", &self.heteronym)
            .field("separator", &self.separator)
            .field("fallback", &self.fallback.map(|_| "fn"))
            .finish()
    }
}
