//! Domain model structs and DTOs.
//!
//! - `movie`: the aggregated movie view and the raw row it is built from
//! - `review`: the review entity, the validated insert DTO, and the loosely
//!   typed request body it is validated from

pub mod movie;
pub mod review;
