//! PostgreSQL repository implementations of the store traits.

pub mod enquiry;
pub mod property;
pub mod user;

pub use enquiry::EnquiryRepository;
pub use property::PropertyRepository;
pub use user::UserRepository;

use estatehub_core::error::{AppError, ErrorKind};

/// Wrap an sqlx failure as a database error with a fixed context message.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}
