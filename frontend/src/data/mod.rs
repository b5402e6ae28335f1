//! Seed tour catalog. Loaded into the initial application state and never
//! persisted; the only runtime mutation is whole-catalog replacement through
//! the state container.

use common::model::tour::{DayItinerary, Difficulty, Tour, TourType};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn day(day: u32, title: &str, description: &str, activities: &[&str]) -> DayItinerary {
    DayItinerary {
        day,
        title: title.to_string(),
        description: description.to_string(),
        activities: strings(activities),
    }
}

pub fn seed_tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "1".to_string(),
            title: "Bamileke Cultural Immersion".to_string(),
            description: "Experience authentic Bamileke traditions in the Western Highlands"
                .to_string(),
            long_description: "Dive deep into the rich cultural heritage of the Bamileke people \
                in Cameroon's Western region. Visit traditional palaces, witness sacred \
                ceremonies, learn ancient crafts, and participate in colorful festivals that \
                have been preserved for generations."
                .to_string(),
            price: 450,
            duration: "5 days".to_string(),
            difficulty: Difficulty::Easy,
            region: "Western".to_string(),
            tour_type: TourType::Cultural,
            diversity_tags: strings(&[
                "Traditional Festivals",
                "Royal Palaces",
                "Handicrafts",
                "Cultural Heritage",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/6249959/pexels-photo-6249959.jpeg",
                "https://images.pexels.com/photos/5805962/pexels-photo-5805962.jpeg",
                "https://images.pexels.com/photos/4100420/pexels-photo-4100420.jpeg",
            ]),
            rating: 4.8,
            reviews_count: 124,
            included: strings(&[
                "Traditional accommodation",
                "All meals",
                "Cultural guide",
                "Festival participation",
            ]),
            excluded: strings(&[
                "International flights",
                "Personal expenses",
                "Alcoholic beverages",
            ]),
            itinerary: vec![
                day(
                    1,
                    "Arrival in Bafoussam",
                    "Welcome to the heart of Bamileke country",
                    &["Airport pickup", "Traditional welcome ceremony", "Palace visit"],
                ),
                day(
                    2,
                    "Festival Participation",
                    "Join in authentic Bamileke celebrations",
                    &["Morning dance rehearsal", "Festival parade", "Traditional feast"],
                ),
            ],
            max_group_size: 12,
            available_dates: strings(&["2025-03-15", "2025-04-10", "2025-05-20"]),
        },
        Tour {
            id: "2".to_string(),
            title: "Dja Wildlife Safari".to_string(),
            description: "Encounter rare species in UNESCO World Heritage rainforest".to_string(),
            long_description: "Explore the pristine Dja Faunal Reserve, home to forest \
                elephants, lowland gorillas, and over 300 bird species. This UNESCO World \
                Heritage site represents one of Africa's most important biodiversity hotspots."
                .to_string(),
            price: 780,
            duration: "7 days".to_string(),
            difficulty: Difficulty::Moderate,
            region: "East".to_string(),
            tour_type: TourType::Wildlife,
            diversity_tags: strings(&[
                "UNESCO Heritage",
                "Rainforest Wildlife",
                "Gorilla Tracking",
                "Biodiversity",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/3608263/pexels-photo-3608263.jpeg",
                "https://images.pexels.com/photos/2280951/pexels-photo-2280951.jpeg",
                "https://images.pexels.com/photos/1670732/pexels-photo-1670732.jpeg",
            ]),
            rating: 4.9,
            reviews_count: 89,
            included: strings(&[
                "Lodge accommodation",
                "All meals",
                "Expert guides",
                "Park permits",
            ]),
            excluded: strings(&["International flights", "Travel insurance", "Personal gear"]),
            itinerary: vec![day(
                1,
                "Journey to Dja Reserve",
                "Travel through changing landscapes",
                &["Departure from Yaoundé", "Scenic drive", "Lodge check-in"],
            )],
            max_group_size: 8,
            available_dates: strings(&["2025-04-05", "2025-05-15", "2025-06-20"]),
        },
        Tour {
            id: "3".to_string(),
            title: "Mount Cameroon Adventure".to_string(),
            description: "Conquer West Africa's highest peak with diverse ecosystems".to_string(),
            long_description: "Challenge yourself on Mount Cameroon, an active volcano and West \
                Africa's highest mountain. Experience incredible biodiversity from tropical \
                rainforest to alpine vegetation zones."
                .to_string(),
            price: 620,
            duration: "4 days".to_string(),
            difficulty: Difficulty::Challenging,
            region: "Southwest".to_string(),
            tour_type: TourType::Adventure,
            diversity_tags: strings(&[
                "Mountain Climbing",
                "Volcanic Landscapes",
                "Alpine Flora",
                "Physical Challenge",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/1365425/pexels-photo-1365425.jpeg",
                "https://images.pexels.com/photos/1624438/pexels-photo-1624438.jpeg",
                "https://images.pexels.com/photos/2662116/pexels-photo-2662116.jpeg",
            ]),
            rating: 4.7,
            reviews_count: 156,
            included: strings(&[
                "Mountain huts",
                "Meals during trek",
                "Professional guides",
                "Safety equipment",
            ]),
            excluded: strings(&["Personal hiking gear", "Travel insurance", "Tips"]),
            itinerary: vec![day(
                1,
                "Base Camp Setup",
                "Prepare for the ascent",
                &["Equipment check", "Orientation briefing", "Practice hike"],
            )],
            max_group_size: 10,
            available_dates: strings(&["2025-03-20", "2025-04-25", "2025-05-30"]),
        },
        Tour {
            id: "4".to_string(),
            title: "Limbe Beach Retreat".to_string(),
            description: "Relax on volcanic black sand beaches with coastal culture".to_string(),
            long_description: "Unwind on Cameroon's stunning Atlantic coast in Limbe, where \
                volcanic black sand beaches meet lush tropical vegetation. Experience coastal \
                Bakweri culture and fresh seafood."
                .to_string(),
            price: 320,
            duration: "3 days".to_string(),
            difficulty: Difficulty::Easy,
            region: "Southwest".to_string(),
            tour_type: TourType::EcoTourism,
            diversity_tags: strings(&[
                "Coastal Culture",
                "Black Sand Beaches",
                "Seafood Cuisine",
                "Marine Life",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/1029604/pexels-photo-1029604.jpeg",
                "https://images.pexels.com/photos/1320684/pexels-photo-1320684.jpeg",
                "https://images.pexels.com/photos/2161467/pexels-photo-2161467.jpeg",
            ]),
            rating: 4.6,
            reviews_count: 203,
            included: strings(&[
                "Beach resort accommodation",
                "Daily breakfast",
                "Coastal guide",
                "Beach activities",
            ]),
            excluded: strings(&[
                "Lunch and dinner",
                "Water sports equipment",
                "Spa treatments",
            ]),
            itinerary: vec![day(
                1,
                "Coastal Arrival",
                "Settle into beach paradise",
                &["Resort check-in", "Beach orientation", "Sunset viewing"],
            )],
            max_group_size: 15,
            available_dates: strings(&["2025-03-10", "2025-04-15", "2025-05-25"]),
        },
        Tour {
            id: "5".to_string(),
            title: "Northern Sahel Experience".to_string(),
            description: "Discover nomadic Fulani culture and savanna landscapes".to_string(),
            long_description: "Journey to Cameroon's northern regions to experience the \
                Sahelian lifestyle. Meet Fulani herders, visit traditional markets, and witness \
                the unique culture at the edge of the Sahara."
                .to_string(),
            price: 520,
            duration: "6 days".to_string(),
            difficulty: Difficulty::Moderate,
            region: "Northern".to_string(),
            tour_type: TourType::Cultural,
            diversity_tags: strings(&[
                "Nomadic Culture",
                "Sahel Landscapes",
                "Traditional Markets",
                "Fulani Heritage",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/631317/pexels-photo-631317.jpeg",
                "https://images.pexels.com/photos/2232135/pexels-photo-2232135.jpeg",
                "https://images.pexels.com/photos/1562578/pexels-photo-1562578.jpeg",
            ]),
            rating: 4.5,
            reviews_count: 87,
            included: strings(&[
                "Traditional lodging",
                "All meals",
                "Cultural guide",
                "Market tours",
            ]),
            excluded: strings(&["International flights", "Personal shopping", "Tips"]),
            itinerary: vec![day(
                1,
                "Maroua Arrival",
                "Enter the gateway to the North",
                &["City orientation", "Traditional welcome", "Local cuisine tasting"],
            )],
            max_group_size: 10,
            available_dates: strings(&["2025-04-01", "2025-05-10", "2025-06-15"]),
        },
        Tour {
            id: "6".to_string(),
            title: "Baka Pygmy Forest Experience".to_string(),
            description: "Learn ancient forest wisdom from indigenous communities".to_string(),
            long_description: "Spend time with the Baka people, one of Cameroon's indigenous \
                communities, in their natural rainforest habitat. Learn traditional hunting \
                techniques, medicinal plants, and forest conservation practices."
                .to_string(),
            price: 680,
            duration: "5 days".to_string(),
            difficulty: Difficulty::Moderate,
            region: "East".to_string(),
            tour_type: TourType::Cultural,
            diversity_tags: strings(&[
                "Indigenous Culture",
                "Forest Wisdom",
                "Traditional Medicine",
                "Conservation",
            ]),
            images: strings(&[
                "https://images.pexels.com/photos/1563356/pexels-photo-1563356.jpeg",
                "https://images.pexels.com/photos/975771/pexels-photo-975771.jpeg",
                "https://images.pexels.com/photos/1571442/pexels-photo-1571442.jpeg",
            ]),
            rating: 4.9,
            reviews_count: 45,
            included: strings(&[
                "Forest camps",
                "Traditional meals",
                "Cultural guide",
                "Activities",
            ]),
            excluded: strings(&["Modern amenities", "Personal items", "Medical insurance"]),
            itinerary: vec![day(
                1,
                "Forest Entry",
                "Begin the journey into ancient wisdom",
                &["Community welcome", "Forest orientation", "Traditional dinner"],
            )],
            max_group_size: 6,
            available_dates: strings(&["2025-03-25", "2025-04-30", "2025-06-05"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_unique_ids_and_valid_records() {
        let tours = seed_tours();
        assert_eq!(tours.len(), 6);
        for (i, tour) in tours.iter().enumerate() {
            assert!(tour.max_group_size > 0, "tour {} group size", tour.id);
            assert!(!tour.available_dates.is_empty());
            assert!(tour.rating >= 0.0 && tour.rating <= 5.0);
            assert!(tour.duration_days() > 0);
            for other in &tours[i + 1..] {
                assert_ne!(tour.id, other.id);
            }
        }
    }
}
