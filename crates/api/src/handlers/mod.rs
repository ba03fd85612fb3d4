//! Request handlers.
//!
//! Handlers delegate to the repositories in `marquee_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod greeting;
pub mod health;
pub mod movies;
pub mod reviews;
