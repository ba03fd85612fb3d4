/// Plain-text body served at `/`.
pub const GREETING: &str = "Movie catalog API connected to the database!";

/// GET /
pub async fn greeting() -> &'static str {
    GREETING
}
