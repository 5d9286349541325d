use async_trait::async_trait;

use super::Result;

/// Machine translation with automatic source-language detection.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target_language` (a language code such as `fr`).
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}
