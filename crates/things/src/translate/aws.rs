//! Amazon Translate backend.

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_translate::operation::translate_text::TranslateTextError;
use aws_sdk_translate::Client;
use aws_smithy_runtime_api::client::result::SdkError;

use things_core::translation::{Result, TranslationError, Translator};

use crate::aws_error::sdk_error_message;

/// Source language code that asks Amazon Translate to detect the language.
const AUTO_DETECT: &str = "auto";

/// Translator backed by Amazon Translate.
pub struct AwsTranslator {
    client: Client,
}

impl AwsTranslator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(sdk_config))
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(AUTO_DETECT)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(map_translate_text_error)?;

        Ok(output.translated_text().to_string())
    }
}

/// Map a TranslateText failure, keeping Amazon Translate's message.
fn map_translate_text_error<R: Debug>(err: SdkError<TranslateTextError, R>) -> TranslationError {
    let message = sdk_error_message(&err);
    match err.as_service_error() {
        Some(TranslateTextError::UnsupportedLanguagePairException(_)) => {
            TranslationError::UnsupportedLanguage(message)
        }
        _ => TranslationError::ServiceFailed(message),
    }
}
