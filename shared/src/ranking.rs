use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::RestaurantItem;

/// Client-side ordering applied to an already fetched result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingFilter {
    /// Best rated first ("avaliados").
    Rating,
    /// Most reviewed first.
    Reviews,
}

impl RankingFilter {
    fn compare(self, a: &RestaurantItem, b: &RestaurantItem) -> Ordering {
        match self {
            Self::Rating => b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)),
            Self::Reviews => b.reviews.unwrap_or(0).cmp(&a.reviews.unwrap_or(0)),
        }
    }
}

/// Orders `items` in place, descending on the filter key. Missing values count
/// as zero and ties keep their backend order. `None` leaves the slice untouched.
pub fn rank(items: &mut [RestaurantItem], filter: Option<RankingFilter>) {
    if let Some(filter) = filter {
        items.sort_by(|a, b| filter.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, rating: Option<f64>, reviews: Option<u64>) -> RestaurantItem {
        RestaurantItem {
            name: name.to_string(),
            address: Some("Rua X".to_string()),
            rating,
            reviews,
            distance_km: Some(1.0),
            lat: Some(-23.5),
            lng: Some(-46.6),
            photo_url: None,
            place_id: None,
            open_now: None,
            price_level: None,
            price_signs: None,
            business_status: None,
        }
    }

    fn names(items: &[RestaurantItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn pizza_scenario_orders_by_each_filter() {
        let backend = vec![
            item("a", Some(4.2), Some(100)),
            item("b", Some(4.8), Some(10)),
        ];

        let mut by_rating = backend.clone();
        rank(&mut by_rating, Some(RankingFilter::Rating));
        assert_eq!(names(&by_rating), ["b", "a"]);

        let mut by_reviews = backend.clone();
        rank(&mut by_reviews, Some(RankingFilter::Reviews));
        assert_eq!(names(&by_reviews), ["a", "b"]);
    }

    #[test]
    fn no_filter_keeps_backend_order() {
        let mut items = vec![
            item("c", Some(1.0), None),
            item("a", Some(5.0), None),
            item("b", None, Some(3)),
        ];
        rank(&mut items, None);
        assert_eq!(names(&items), ["c", "a", "b"]);
    }

    #[test]
    fn missing_values_rank_as_zero() {
        let mut items = vec![
            item("missing", None, None),
            item("zero", Some(0.0), Some(0)),
            item("rated", Some(3.5), Some(2)),
        ];
        rank(&mut items, Some(RankingFilter::Rating));
        assert_eq!(names(&items), ["rated", "missing", "zero"]);

        rank(&mut items, Some(RankingFilter::Reviews));
        assert_eq!(names(&items), ["rated", "missing", "zero"]);
    }

    #[test]
    fn filter_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RankingFilter::Reviews).unwrap(),
            "\"reviews\""
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn items_strategy() -> impl Strategy<Value = Vec<RestaurantItem>> {
            prop::collection::vec(
                (
                    prop::option::of((0u8..=10).prop_map(|r| f64::from(r) / 2.0)),
                    prop::option::of(0u64..5),
                ),
                0..24,
            )
            .prop_map(|keys| {
                keys.into_iter()
                    .enumerate()
                    .map(|(idx, (rating, reviews))| item(&idx.to_string(), rating, reviews))
                    .collect()
            })
        }

        fn position(item: &RestaurantItem) -> usize {
            item.name.parse().unwrap()
        }

        proptest! {
            #[test]
            fn prop_rating_is_non_increasing_and_stable(mut items in items_strategy()) {
                rank(&mut items, Some(RankingFilter::Rating));
                for pair in items.windows(2) {
                    let (a, b) = (pair[0].rating.unwrap_or(0.0), pair[1].rating.unwrap_or(0.0));
                    prop_assert!(a >= b);
                    if a == b {
                        prop_assert!(position(&pair[0]) < position(&pair[1]));
                    }
                }
            }

            #[test]
            fn prop_reviews_is_non_increasing_and_stable(mut items in items_strategy()) {
                rank(&mut items, Some(RankingFilter::Reviews));
                for pair in items.windows(2) {
                    let (a, b) = (pair[0].reviews.unwrap_or(0), pair[1].reviews.unwrap_or(0));
                    prop_assert!(a >= b);
                    if a == b {
                        prop_assert!(position(&pair[0]) < position(&pair[1]));
                    }
                }
            }

            #[test]
            fn prop_ranking_is_a_permutation(
                items in items_strategy(),
                by_reviews in any::<bool>()
            ) {
                let filter = if by_reviews { RankingFilter::Reviews } else { RankingFilter::Rating };
                let mut ranked = items.clone();
                rank(&mut ranked, Some(filter));
                let mut before: Vec<usize> = items.iter().map(position).collect();
                let mut after: Vec<usize> = ranked.iter().map(position).collect();
                before.sort_unstable();
                after.sort_unstable();
                prop_assert_eq!(before, after);
            }
        }
    }
}
