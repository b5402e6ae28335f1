use serde::{Deserialize, Serialize};

/// Physical difficulty rating of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Challenging,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Challenging => "Challenging",
        }
    }
}

/// Category of a tour package. The serialized form uses the lowercase
/// kebab-case tags that double as translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TourType {
    Cultural,
    Wildlife,
    Adventure,
    EcoTourism,
}

impl TourType {
    pub const ALL: [TourType; 4] = [
        TourType::Cultural,
        TourType::Wildlife,
        TourType::Adventure,
        TourType::EcoTourism,
    ];

    /// The kebab-case tag, also used as the translation key for the label.
    pub fn tag(self) -> &'static str {
        match self {
            TourType::Cultural => "cultural",
            TourType::Wildlife => "wildlife",
            TourType::Adventure => "adventure",
            TourType::EcoTourism => "eco-tourism",
        }
    }
}

/// One day of a tour itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayItinerary {
    pub day: u32,
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
}

/// A purchasable travel package. Tours are immutable seed data at runtime;
/// the catalog is only ever replaced wholesale through the state container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    /// Price per person in whole currency units.
    pub price: u32,
    /// Free-text duration such as `"5 days"`. See [`Tour::duration_days`].
    pub duration: String,
    pub difficulty: Difficulty,
    pub region: String,
    #[serde(rename = "type")]
    pub tour_type: TourType,
    pub diversity_tags: Vec<String>,
    pub images: Vec<String>,
    /// Average review rating, 0.0 to 5.0.
    pub rating: f32,
    pub reviews_count: u32,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub itinerary: Vec<DayItinerary>,
    pub max_group_size: u32,
    /// ISO calendar dates on which the tour departs.
    pub available_dates: Vec<String>,
}

impl Tour {
    /// Parses the leading integer out of the free-text duration, ignoring the
    /// unit. Used for the duration sort; tours with an unparseable duration
    /// sort first.
    pub fn duration_days(&self) -> u32 {
        self.duration
            .split_whitespace()
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn duration_days_parses_leading_integer() {
        let mut tour = sample_tour();
        tour.duration = "7 days".to_string();
        assert_eq!(tour.duration_days(), 7);
        tour.duration = "overnight".to_string();
        assert_eq!(tour.duration_days(), 0);
    }

    #[test]
    fn tour_type_serializes_as_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TourType::EcoTourism).unwrap(),
            "\"eco-tourism\""
        );
        assert_eq!(
            serde_json::from_str::<TourType>("\"cultural\"").unwrap(),
            TourType::Cultural
        );
    }

    pub(crate) fn sample_tour() -> Tour {
        Tour {
            id: "1".to_string(),
            title: "Bamileke Cultural Immersion".to_string(),
            description: "Experience authentic Bamileke traditions".to_string(),
            long_description: String::new(),
            price: 450,
            duration: "5 days".to_string(),
            difficulty: Difficulty::Easy,
            region: "Western".to_string(),
            tour_type: TourType::Cultural,
            diversity_tags: vec!["Traditional Festivals".to_string()],
            images: vec![],
            rating: 4.8,
            reviews_count: 124,
            included: vec![],
            excluded: vec![],
            itinerary: vec![],
            max_group_size: 12,
            available_dates: vec!["2025-03-15".to_string(), "2025-04-10".to_string()],
        }
    }
}
