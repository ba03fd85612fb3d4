//! Repository for the `movies` table joined with `reviews`.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{MovieReviewRow, MovieWithReviews};

/// Projection shared by both aggregation queries. Reviews are folded into a
/// JSON array per movie; a movie with no matching review aggregates to NULL.
const AGGREGATE_SELECT: &str = "\
    SELECT m.id, m.title, m.abstract AS content, m.image, \
           (json_agg(json_build_object('id', r.id, 'name', r.name, 'vote', r.vote, 'text', r.text) \
                     ORDER BY r.id) \
                FILTER (WHERE r.id IS NOT NULL))::text AS reviews \
    FROM movies m \
    LEFT JOIN reviews r ON r.movie_id = m.id";

/// Read access to movies and their aggregated reviews.
pub struct MovieRepo;

impl MovieRepo {
    /// List every movie with its reviews, one entry per movie, ordered by id.
    pub async fn list_with_reviews(pool: &PgPool) -> Result<Vec<MovieWithReviews>, sqlx::Error> {
        let query = format!("{AGGREGATE_SELECT} GROUP BY m.id ORDER BY m.id");
        let rows = sqlx::query_as::<_, MovieReviewRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(MovieWithReviews::from).collect())
    }

    /// Find one movie with its reviews. `None` when no such movie exists.
    pub async fn find_with_reviews(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithReviews>, sqlx::Error> {
        let query = format!("{AGGREGATE_SELECT} WHERE m.id = $1 GROUP BY m.id");
        let row = sqlx::query_as::<_, MovieReviewRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(MovieWithReviews::from))
    }
}
