//! Repository for the `reviews` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::CreateReview;

/// Write access to reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review. The generated id is not read back.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO reviews (movie_id, name, vote, text)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(input.movie_id)
        .bind(&input.name)
        .bind(input.vote)
        .bind(&input.text)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Count the reviews referencing a movie.
    pub async fn count_for_movie(pool: &PgPool, movie_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews WHERE movie_id = $1")
            .bind(movie_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
