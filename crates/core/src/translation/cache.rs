//! Translation cache lookups on stored items.
//!
//! A cached translation is stored on its item under the attribute
//! `translation_<language>`. Language codes are used verbatim, so `fr` and
//! `FR` are distinct cache entries.

use crate::item::Item;

pub const TRANSLATION_ATTRIBUTE_PREFIX: &str = "translation_";

/// Outcome of looking up a cached translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup<'a> {
    Hit(&'a str),
    Miss,
}

/// Returns the store attribute name holding the translation for `language`.
pub fn translation_attribute_name(language: &str) -> String {
    format!("{TRANSLATION_ATTRIBUTE_PREFIX}{language}")
}

/// Returns the language code encoded in a translation attribute name.
pub fn language_from_attribute_name(name: &str) -> Option<&str> {
    name.strip_prefix(TRANSLATION_ATTRIBUTE_PREFIX)
        .filter(|language| !language.is_empty())
}

/// Looks up the cached translation for `language`. An empty cached value
/// counts as a miss.
pub fn lookup_cached<'a>(item: &'a Item, language: &str) -> CacheLookup<'a> {
    match item.translations.get(language) {
        Some(text) if !text.is_empty() => CacheLookup::Hit(text),
        _ => CacheLookup::Miss,
    }
}
