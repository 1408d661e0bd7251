//! hanzi-pinyin crate root
//!
//! Converts hanzi text to pinyin, one character at a time: dictionary lookup,
//! syllable decomposition, and style rendering, with heteronym expansion and
//! a caller-supplied fallback for non-hanzi input.
//!
//! Public API exported here:
//! - `pinyin`, `lazy_pinyin`, `slug` from `convert`
//! - `Args` and `Fallback` from `config`
//! - `Style` from `style`
//! - `Syllable` and `decompose` from `syllable`
//!
//! ```rust
//! use hanzi_pinyin::{pinyin, slug, Args, Style};
//!
//! let args = Args::default();
//! assert_eq!(pinyin("中国人", &args), vec![vec!["zhōng"], vec!["guó"], vec!["rén"]]);
//!
//! let args = Args { style: Style::Normal, ..Args::default() };
//! assert_eq!(slug("中国人", &args), "zhong-guo-ren");
//! ```

pub mod config;
pub mod convert;
pub mod dict;
mod dict_data;
pub mod style;
pub mod syllable;
pub mod tone;

// Convenience re-exports for common types used by callers.
pub use config::{Args, Fallback};
pub use convert::{lazy_pinyin, pinyin, slug};
pub use style::{render, Style};
pub use syllable::{decompose, Syllable};
