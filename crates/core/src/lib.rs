//! Functional core for the things service.
//!
//! Pure data types, validation, and the traits that the storage and
//! translation backends implement. Nothing in this crate performs I/O.

pub mod item;
pub mod storage;
pub mod translation;
