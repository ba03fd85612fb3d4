//! Aggregated movie view and review-list normalization.

use marquee_core::types::{DbId, Vote};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::review::Review;

/// Literal the aggregation yields when it was handed a SQL NULL.
const NULL_SENTINEL: &str = "null";

/// Placeholder left behind when an object was stringified instead of
/// serialized upstream.
const OBJECT_PLACEHOLDER: &str = "[object Object]";

/// A row produced by the movie aggregation query, before normalization.
#[derive(Debug, Clone, FromRow)]
pub struct MovieReviewRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub image: String,
    /// JSON array text, or NULL when the movie has no reviews.
    pub reviews: Option<String>,
}

/// A movie merged with all of its reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieWithReviews {
    pub id: DbId,
    pub title: String,
    /// Taken from the `abstract` column.
    pub content: String,
    pub image: String,
    pub reviews: Vec<Review>,
}

impl From<MovieReviewRow> for MovieWithReviews {
    fn from(row: MovieReviewRow) -> Self {
        let reviews = parse_reviews(row.reviews.as_deref());
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            image: row.image,
            reviews,
        }
    }
}

/// One element of the aggregated array. A left join with no match yields an
/// element whose fields are all null.
#[derive(Debug, Deserialize)]
struct AggregatedReview {
    id: Option<DbId>,
    name: Option<String>,
    vote: Option<Vote>,
    text: Option<String>,
}

impl AggregatedReview {
    fn into_review(self) -> Option<Review> {
        Some(Review {
            id: self.id?,
            name: self.name?,
            vote: self.vote?,
            text: self.text?,
        })
    }
}

/// Normalize the aggregated reviews field into a list.
///
/// Anything other than a well-formed JSON array (absent, the `null`
/// sentinel, the object placeholder, malformed text) becomes an empty list.
/// Elements are converted one by one: placeholder elements and elements
/// that do not match the review shape are dropped without affecting the rest.
pub fn parse_reviews(raw: Option<&str>) -> Vec<Review> {
    let Some(raw) = raw.map(str::trim) else {
        return Vec::new();
    };
    if raw.is_empty() || raw == NULL_SENTINEL || raw == OBJECT_PLACEHOLDER {
        return Vec::new();
    }

    let entries = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "Discarding malformed aggregated reviews");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            match serde_json::from_value::<AggregatedReview>(entry) {
                Ok(review) => review.into_review(),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Discarding malformed aggregated review");
                    None
                }
            }
        })
        .collect()
}
