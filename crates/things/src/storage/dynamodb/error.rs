//! DynamoDB error mapping.
//!
//! Classifies SDK failures into `RepositoryError` kinds while keeping
//! DynamoDB's message intact.

use std::error::Error;
use std::fmt::Debug;

use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use things_core::storage::RepositoryError;

use crate::aws_error::{is_connection_failure, sdk_error_message};

/// Map a Query or GetItem failure.
pub fn map_read_error<E, R>(err: SdkError<E, R>) -> RepositoryError
where
    E: Error + ProvideErrorMetadata + 'static,
    R: Debug,
{
    let message = sdk_error_message(&err);
    if is_connection_failure(&err) {
        RepositoryError::ConnectionFailed(message)
    } else {
        RepositoryError::ReadFailed(message)
    }
}

/// Map a PutItem or UpdateItem failure.
pub fn map_write_error<E, R>(err: SdkError<E, R>) -> RepositoryError
where
    E: Error + ProvideErrorMetadata + 'static,
    R: Debug,
{
    let message = sdk_error_message(&err);
    if is_connection_failure(&err) {
        RepositoryError::ConnectionFailed(message)
    } else {
        RepositoryError::WriteFailed(message)
    }
}
