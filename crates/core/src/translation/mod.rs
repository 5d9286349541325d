mod cache;
mod error;
mod traits;

pub use cache::{
    language_from_attribute_name, lookup_cached, translation_attribute_name, CacheLookup,
    TRANSLATION_ATTRIBUTE_PREFIX,
};
pub use error::{Result, TranslationError};
pub use traits::Translator;
