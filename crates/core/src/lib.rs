//! Domain primitives shared by the database and HTTP layers.

pub mod error;
pub mod review;
pub mod types;
