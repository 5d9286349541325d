//! Deterministic in-process translator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use things_core::translation::{Result, Translator};

/// Fake translator that tags the text with the target language.
///
/// `"Hello"` translated to `fr` becomes `"[fr] Hello"`. Clones share the call
/// counter, so a test can keep a handle while the application state owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTranslator {
    calls: Arc<AtomicUsize>,
}

impl InMemoryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of translations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for InMemoryTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("[{target_language}] {text}"))
    }
}
