//! Serverless CRUD service for keyed items with cached translations.
//!
//! The same request logic runs behind two surfaces: per-route Lambda
//! functions (see [`lambda`]) and a local axum server (see [`app`]).

pub mod app;
mod aws_error;
pub mod config;
pub mod handlers;
pub mod lambda;
pub mod state;
pub mod storage;
pub mod translate;
