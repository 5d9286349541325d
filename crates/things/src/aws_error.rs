//! Message extraction for AWS SDK errors.
//!
//! DynamoDB and Amazon Translate failures reach callers with the service's
//! own message; adapters only decide which error kind it belongs to.

use std::error::Error;
use std::fmt::Debug;

use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;

/// The message the service attached to `err`.
///
/// Falls back to the rendered service error when the response carried no
/// message, and to the full error chain when the request never got a
/// service response.
pub(crate) fn sdk_error_message<E, R>(err: &SdkError<E, R>) -> String
where
    E: Error + ProvideErrorMetadata + 'static,
    R: Debug,
{
    match err.as_service_error() {
        Some(service) => service
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| service.to_string()),
        None => DisplayErrorContext(err).to_string(),
    }
}

/// Whether `err` failed before the service could answer.
pub(crate) fn is_connection_failure<E, R>(err: &SdkError<E, R>) -> bool {
    matches!(err, SdkError::DispatchFailure(_) | SdkError::TimeoutError(_))
}
