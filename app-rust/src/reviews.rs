use crate::{
    store::{JsonStore, REVIEWS_KEY},
    types::{new_id, today, Review, User},
    ScholarError, ScholarResult,
};

pub const DEFAULT_RATING: u8 = 5;

/// Peer reviews of the application, newest first.
pub struct ReviewBoard {
    store: JsonStore,
}

impl ReviewBoard {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> ScholarResult<Vec<Review>> {
        self.store.load_list(REVIEWS_KEY)
    }

    pub fn submit(&self, author: &User, rating: u8, comment: &str) -> ScholarResult<Review> {
        if comment.trim().is_empty() {
            return Err(ScholarError::InvalidInput("a review needs a comment".to_string()));
        }
        if !(1..=5).contains(&rating) {
            return Err(ScholarError::InvalidInput(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }

        let review = Review {
            id: new_id(),
            user_name: author.name.clone(),
            user_avatar: author.avatar.clone(),
            rating,
            comment: comment.to_string(),
            date: today(),
        };

        let mut reviews = self.list()?;
        reviews.insert(0, review.clone());
        self.store.save(REVIEWS_KEY, &reviews)?;

        tracing::info!(rating, total = reviews.len(), "review submitted");
        Ok(review)
    }

    /// Mean rating, or `None` when nobody has reviewed yet.
    pub fn average_rating(&self) -> ScholarResult<Option<f64>> {
        let reviews = self.list()?;
        if reviews.is_empty() {
            return Ok(None);
        }
        let sum: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
        #[allow(clippy::cast_precision_loss)]
        Ok(Some(f64::from(sum) / reviews.len() as f64))
    }
}
