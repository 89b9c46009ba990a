use super::models::Review;

/// Descriptive statistics over the static review list. Sentiment is
/// derived from the rating alone: positive ≥ 4, neutral = 3,
/// negative ≤ 2.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReviewStats {
    pub average: f64,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub satisfaction_pct: f64,
}

impl ReviewStats {
    /// An empty review list yields the all-zero sentinel instead of a
    /// NaN average or a division failure.
    #[must_use]
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::default();
        }

        let total = reviews.len();
        let mut rating_sum = 0u32;
        let mut positive = 0;
        let mut neutral = 0;
        let mut negative = 0;

        for review in reviews {
            rating_sum += u32::from(review.rating);
            match review.rating {
                4.. => positive += 1,
                3 => neutral += 1,
                _ => negative += 1,
            }
        }

        Self {
            average: f64::from(rating_sum) / total as f64,
            positive,
            neutral,
            negative,
            satisfaction_pct: 100.0 * positive as f64 / total as f64,
        }
    }

    /// Whole stars to fill when rendering the average, 0..=5.
    #[must_use]
    pub fn filled_stars(&self) -> usize {
        (self.average.round() as usize).min(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            name: "Guest",
            rating,
            comment: "",
            date: "2024-01-01",
        }
    }

    #[test]
    fn mixed_ratings_aggregate_into_sentiment_buckets() {
        let reviews = [review(5), review(5), review(3), review(1)];
        let stats = ReviewStats::from_reviews(&reviews);

        assert!((stats.average - 3.5).abs() < f64::EPSILON);
        assert_eq!(stats.positive, 2);
        assert_eq!(stats.neutral, 1);
        assert_eq!(stats.negative, 1);
        assert!((stats.satisfaction_pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn a_single_positive_review_scores_full_satisfaction() {
        let stats = ReviewStats::from_reviews(&[review(4)]);

        assert!((stats.average - 4.0).abs() < f64::EPSILON);
        assert_eq!(stats.positive, 1);
        assert_eq!(stats.neutral, 0);
        assert_eq!(stats.negative, 0);
        assert!((stats.satisfaction_pct - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_reviews_yield_the_zero_sentinel() {
        let stats = ReviewStats::from_reviews(&[]);

        assert_eq!(stats, ReviewStats::default());
        assert!(stats.average.abs() < f64::EPSILON);
        assert!(stats.satisfaction_pct.abs() < f64::EPSILON);
    }

    #[test]
    fn filled_stars_round_the_average() {
        let reviews = [review(5), review(4)];
        let stats = ReviewStats::from_reviews(&reviews);
        assert_eq!(stats.filled_stars(), 5);

        let reviews = [review(4), review(3)];
        let stats = ReviewStats::from_reviews(&reviews);
        assert_eq!(stats.filled_stars(), 4);
    }
}
