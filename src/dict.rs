// hanzi-pinyin/src/dict.rs
//
// Dictionary lookup over the embedded readings table. The table itself lives
// in `dict_data.rs` as a pre-built static asset; it is read-only for the
// process lifetime, so concurrent lookups need no synchronization.

use crate::dict_data::DICT;

/// Raw dictionary entry for a character: comma-separated readings in
/// frequency order, or `None` for anything outside the covered range.
pub fn lookup(ch: char) -> Option<&'static str> {
    DICT.get(&ch).copied()
}

/// Readings for a character, primary reading first. The returned list is
/// never empty when `Some`.
pub fn readings(ch: char) -> Option<Vec<&'static str>> {
    lookup(ch).map(|entry| entry.split(',').collect())
}
