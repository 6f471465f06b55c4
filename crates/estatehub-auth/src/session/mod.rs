//! Session flows: sign-in and token verification.

pub mod manager;

pub use manager::{LoginResult, SessionManager};
