#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is kept as the caller supplied it so non-numeric path segments
    /// can be reported the same way as unknown numeric ids.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
