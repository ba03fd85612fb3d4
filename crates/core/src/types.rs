/// All database primary keys are PostgreSQL BIGINT.
pub type DbId = i64;

/// Review votes are stored as PostgreSQL INTEGER.
pub type Vote = i32;
