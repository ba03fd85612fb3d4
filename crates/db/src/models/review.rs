//! Review entity and submission DTOs.

use marquee_core::error::CoreError;
use marquee_core::review::{
    is_missing, require_integer, require_text, require_vote, FIELD_MOVIE_ID, FIELD_NAME,
    FIELD_TEXT, REQUIRED_FIELDS_MESSAGE,
};
use marquee_core::types::{DbId, Vote};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A review as embedded in the aggregated movie view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: DbId,
    pub name: String,
    pub vote: Vote,
    pub text: String,
}

/// Validated input for inserting a row into `reviews`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReview {
    pub movie_id: DbId,
    pub name: String,
    pub vote: Vote,
    pub text: String,
}

/// Body of `POST /reviews`.
///
/// Every field is optional and untyped here so that absent or mistyped
/// fields are reported as validation failures instead of body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewReviewRequest {
    #[serde(rename = "movieId")]
    pub movie_id: Option<Value>,
    pub name: Option<Value>,
    pub vote: Option<Value>,
    pub text: Option<Value>,
}

impl NewReviewRequest {
    /// Check presence of all four fields, then their shapes.
    pub fn validate(&self) -> Result<CreateReview, CoreError> {
        let fields = [&self.movie_id, &self.name, &self.vote, &self.text];
        if fields.iter().any(|f| is_missing(f.as_ref())) {
            return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(CreateReview {
            movie_id: require_integer(FIELD_MOVIE_ID, self.movie_id.as_ref())?,
            name: require_text(FIELD_NAME, self.name.as_ref())?,
            vote: require_vote(self.vote.as_ref())?,
            text: require_text(FIELD_TEXT, self.text.as_ref())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn request(body: Value) -> NewReviewRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_complete_request_validates() {
        let input = request(json!({"movieId": 1, "name": "A", "vote": 5, "text": "Good"}))
            .validate()
            .unwrap();

        assert_eq!(
            input,
            CreateReview {
                movie_id: 1,
                name: "A".into(),
                vote: 5,
                text: "Good".into(),
            }
        );
    }

    #[test]
    fn test_each_missing_field_rejected() {
        for field in ["movieId", "name", "vote", "text"] {
            let mut body = json!({"movieId": 1, "name": "A", "vote": 5, "text": "Good"});
            body.as_object_mut().unwrap().remove(field);

            let err = request(body).validate().unwrap_err();
            assert_matches!(
                err,
                CoreError::Validation(msg) if msg == REQUIRED_FIELDS_MESSAGE,
                "omitting {field} should be rejected"
            );
        }
    }

    #[test]
    fn test_null_and_empty_fields_count_as_missing() {
        let err = request(json!({"movieId": 1, "name": "", "vote": 5, "text": null}))
            .validate()
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let input = request(json!({"movieId": "2", "name": "B", "vote": "4", "text": "Fine"}))
            .validate()
            .unwrap();
        assert_eq!(input.movie_id, 2);
        assert_eq!(input.vote, 4);
    }

    #[test]
    fn test_non_integer_vote_rejected() {
        let err = request(json!({"movieId": 1, "name": "A", "vote": "great", "text": "Good"}))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("vote must be an integer"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let input = request(json!({
            "movieId": 1, "name": "A", "vote": 5, "text": "Good", "extra": true
        }))
        .validate();
        assert!(input.is_ok());
    }
}
