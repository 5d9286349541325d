pub mod error;
pub mod health;
pub mod items;
pub mod translation;

pub use error::AppError;
