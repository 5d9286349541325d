//! Pure functions for mapping item errors to HTTP status codes.

use super::ItemError;

/// Maps an [`ItemError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Repository` -> 500 (Internal Server Error)
/// - `Translation` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use things_core::item::{item_error_to_status_code, ItemError};
///
/// let error = ItemError::not_found("Item not found");
/// assert_eq!(item_error_to_status_code(&error), 404);
/// ```
pub fn item_error_to_status_code(error: &ItemError) -> u16 {
    match error {
        ItemError::Validation(_) => 400,
        ItemError::NotFound(_) => 404,
        ItemError::Repository(_) => 500,
        ItemError::Translation(_) => 500,
    }
}
