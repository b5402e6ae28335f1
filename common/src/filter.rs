//! Client-side filtering and sorting of the tour catalog.
//!
//! A [`TourFilter`] is a conjunctive specification: every active predicate
//! must match for a tour to be included. All sorts use `slice::sort_by`,
//! which is stable, so tours that compare equal keep their catalog order.

use crate::model::tour::{Difficulty, Tour, TourType};

/// Ordering applied to the filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending review count.
    #[default]
    Popularity,
    PriceLowToHigh,
    PriceHighToLow,
    /// Descending rating.
    Rating,
    /// Ascending parsed duration, see [`Tour::duration_days`].
    Duration,
}

/// Filter specification built from the tours page controls. Empty or `None`
/// fields are inactive and match everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TourFilter {
    /// Case-insensitive free text matched against title, description, and
    /// diversity tags.
    pub query: String,
    pub region: Option<String>,
    pub tour_type: Option<TourType>,
    pub difficulty: Option<Difficulty>,
    /// Inclusive price ceiling per person.
    pub max_price: Option<u32>,
    pub sort: SortKey,
}

impl TourFilter {
    /// Whether a single tour satisfies every active predicate.
    pub fn matches(&self, tour: &Tour) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let text_hit = tour.title.to_lowercase().contains(&needle)
                || tour.description.to_lowercase().contains(&needle)
                || tour
                    .diversity_tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle));
            if !text_hit {
                return false;
            }
        }
        if let Some(region) = &self.region {
            if &tour.region != region {
                return false;
            }
        }
        if let Some(tour_type) = self.tour_type {
            if tour.tour_type != tour_type {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if tour.difficulty != difficulty {
                return false;
            }
        }
        if let Some(ceiling) = self.max_price {
            if tour.price > ceiling {
                return false;
            }
        }
        true
    }

    /// Filters the catalog and sorts the result by the configured key.
    pub fn apply(&self, tours: &[Tour]) -> Vec<Tour> {
        let mut filtered: Vec<Tour> = tours.iter().filter(|t| self.matches(t)).cloned().collect();
        match self.sort {
            SortKey::Popularity => {
                filtered.sort_by(|a, b| b.reviews_count.cmp(&a.reviews_count));
            }
            SortKey::PriceLowToHigh => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHighToLow => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Duration => {
                filtered.sort_by(|a, b| a.duration_days().cmp(&b.duration_days()));
            }
        }
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tour::tests::sample_tour;

    fn catalog() -> Vec<Tour> {
        let mut safari = sample_tour();
        safari.id = "2".to_string();
        safari.title = "Dja Wildlife Safari".to_string();
        safari.description = "Encounter rare species in UNESCO rainforest".to_string();
        safari.diversity_tags = vec!["Gorilla Tracking".to_string()];
        safari.price = 780;
        safari.duration = "7 days".to_string();
        safari.difficulty = Difficulty::Moderate;
        safari.region = "East".to_string();
        safari.tour_type = TourType::Wildlife;
        safari.rating = 4.9;
        safari.reviews_count = 89;

        let mut trek = sample_tour();
        trek.id = "3".to_string();
        trek.title = "Mount Cameroon Adventure".to_string();
        trek.price = 620;
        trek.duration = "4 days".to_string();
        trek.difficulty = Difficulty::Challenging;
        trek.region = "Southwest".to_string();
        trek.tour_type = TourType::Adventure;
        trek.rating = 4.7;
        trek.reviews_count = 156;

        vec![sample_tour(), safari, trek]
    }

    #[test]
    fn inactive_filter_matches_everything() {
        let filter = TourFilter::default();
        assert_eq!(filter.apply(&catalog()).len(), 3);
    }

    #[test]
    fn results_are_a_conjunctive_subset() {
        let filter = TourFilter {
            tour_type: Some(TourType::Wildlife),
            max_price: Some(800),
            ..TourFilter::default()
        };
        let tours = catalog();
        let result = filter.apply(&tours);
        assert!(result.iter().all(|t| filter.matches(t)));
        for excluded in tours.iter().filter(|t| !result.contains(t)) {
            assert!(!filter.matches(excluded));
        }
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn query_matches_title_description_and_tags_case_insensitively() {
        let by_title = TourFilter {
            query: "BAMILEKE".to_string(),
            ..TourFilter::default()
        };
        assert_eq!(by_title.apply(&catalog()).len(), 1);

        let by_tag = TourFilter {
            query: "gorilla".to_string(),
            ..TourFilter::default()
        };
        assert_eq!(by_tag.apply(&catalog())[0].id, "2");

        let miss = TourFilter {
            query: "desert".to_string(),
            ..TourFilter::default()
        };
        assert!(miss.apply(&catalog()).is_empty());
    }

    #[test]
    fn price_ceiling_is_inclusive() {
        let filter = TourFilter {
            max_price: Some(620),
            ..TourFilter::default()
        };
        let ids: Vec<_> = filter.apply(&catalog()).iter().map(|t| t.id.clone()).collect();
        assert!(ids.contains(&"3".to_string()));
        assert!(!ids.contains(&"2".to_string()));
    }

    #[test]
    fn price_ascending_is_non_decreasing() {
        let filter = TourFilter {
            sort: SortKey::PriceLowToHigh,
            ..TourFilter::default()
        };
        let prices: Vec<_> = filter.apply(&catalog()).iter().map(|t| t.price).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn rating_descending_is_non_increasing() {
        let filter = TourFilter {
            sort: SortKey::Rating,
            ..TourFilter::default()
        };
        let ratings: Vec<_> = filter.apply(&catalog()).iter().map(|t| t.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn default_sort_is_popularity() {
        let result = TourFilter::default().apply(&catalog());
        let counts: Vec<_> = result.iter().map(|t| t.reviews_count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn duration_sort_uses_leading_integer() {
        let filter = TourFilter {
            sort: SortKey::Duration,
            ..TourFilter::default()
        };
        let days: Vec<_> = filter
            .apply(&catalog())
            .iter()
            .map(|t| t.duration_days())
            .collect();
        assert_eq!(days, vec![4, 5, 7]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let mut tours = catalog();
        for tour in &mut tours {
            tour.price = 500;
        }
        let filter = TourFilter {
            sort: SortKey::PriceLowToHigh,
            ..TourFilter::default()
        };
        let ids: Vec<_> = filter.apply(&tours).iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
