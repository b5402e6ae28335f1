//! Bilingual (English/French) display text lookup.
//!
//! `t` is a pure function of a key and a language tag. Unknown keys are
//! rendered as-is so a missing translation degrades to something visible
//! rather than an empty string.

use serde::{Deserialize, Serialize};

/// Content language. The serialized form matches the `"en"` / `"fr"` tags
/// written to durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

/// Looks up the display text for `key` in `language`, falling back to the
/// key itself when no translation exists.
pub fn t(key: &str, language: Language) -> &str {
    let hit = match language {
        Language::En => english(key),
        Language::Fr => french(key),
    };
    hit.unwrap_or(key)
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        // Navigation
        "home" => "Home",
        "tours" => "Tours",
        "about" => "About Us",
        "blog" => "Blog",
        "contact" => "Contact",
        "login" => "Login",
        "register" => "Register",
        "logout" => "Logout",
        "dashboard" => "Dashboard",
        // Hero section
        "heroTitle" => "Discover Cameroon",
        "heroSubtitle" => "Africa in Miniature",
        "heroDescription" => "Experience incredible diversity - from rainforest gorillas to Sahel nomads, volcanic peaks to pristine beaches",
        "searchPlaceholder" => "Search tours by destination, activity, or experience...",
        "searchButton" => "Search Tours",
        // Common
        "bookNow" => "Book Now",
        "learnMore" => "Learn More",
        "viewDetails" => "View Details",
        "price" => "Price",
        "duration" => "Duration",
        "difficulty" => "Difficulty",
        "rating" => "Rating",
        "reviews" => "reviews",
        // Tour categories
        "cultural" => "Cultural",
        "wildlife" => "Wildlife",
        "adventure" => "Adventure",
        "eco-tourism" => "Eco-Tourism",
        // Regions
        "northern" => "Northern",
        "eastern" => "Eastern",
        "western" => "Western",
        "southwest" => "Southwest",
        "littoral" => "Littoral",
        "center" => "Center",
        // Booking
        "bookingTitle" => "Complete Your Booking",
        "selectDate" => "Select Date",
        "numberOfPeople" => "Number of People",
        "specialRequests" => "Special Requests",
        "totalPrice" => "Total Price",
        // Footer
        "aboutCompany" => "Promoting sustainable tourism in Cameroon",
        "followUs" => "Follow Us",
        "newsletter" => "Newsletter",
        "newsletterText" => "Stay updated with our latest tours and offers",
        "subscribe" => "Subscribe",
        _ => return None,
    })
}

fn french(key: &str) -> Option<&'static str> {
    Some(match key {
        // Navigation
        "home" => "Accueil",
        "tours" => "Circuits",
        "about" => "À Propos",
        "blog" => "Blog",
        "contact" => "Contact",
        "login" => "Connexion",
        "register" => "S'inscrire",
        "logout" => "Déconnexion",
        "dashboard" => "Tableau de Bord",
        // Hero section
        "heroTitle" => "Découvrez le Cameroun",
        "heroSubtitle" => "L'Afrique en Miniature",
        "heroDescription" => "Vivez une diversité incroyable - des gorilles de forêt aux nomades du Sahel, des pics volcaniques aux plages pristines",
        "searchPlaceholder" => "Rechercher des circuits par destination, activité ou expérience...",
        "searchButton" => "Rechercher",
        // Common
        "bookNow" => "Réserver",
        "learnMore" => "En Savoir Plus",
        "viewDetails" => "Voir Détails",
        "price" => "Prix",
        "duration" => "Durée",
        "difficulty" => "Difficulté",
        "rating" => "Note",
        "reviews" => "avis",
        // Tour categories
        "cultural" => "Culturel",
        "wildlife" => "Faune",
        "adventure" => "Aventure",
        "eco-tourism" => "Éco-Tourisme",
        // Regions
        "northern" => "Nord",
        "eastern" => "Est",
        "western" => "Ouest",
        "southwest" => "Sud-Ouest",
        "littoral" => "Littoral",
        "center" => "Centre",
        // Booking
        "bookingTitle" => "Finaliser Votre Réservation",
        "selectDate" => "Sélectionner la Date",
        "numberOfPeople" => "Nombre de Personnes",
        "specialRequests" => "Demandes Spéciales",
        "totalPrice" => "Prix Total",
        // Footer
        "aboutCompany" => "Promotion du tourisme durable au Cameroun",
        "followUs" => "Suivez-nous",
        "newsletter" => "Newsletter",
        "newsletterText" => "Restez informé de nos derniers circuits et offres",
        "subscribe" => "S'abonner",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_both_languages() {
        assert_eq!(t("tours", Language::En), "Tours");
        assert_eq!(t("tours", Language::Fr), "Circuits");
        assert_eq!(t("bookNow", Language::Fr), "Réserver");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(t("no-such-key", Language::En), "no-such-key");
        assert_eq!(t("no-such-key", Language::Fr), "no-such-key");
    }

    #[test]
    fn language_tags_round_trip() {
        assert_eq!(Language::from_tag("fr"), Some(Language::Fr));
        assert_eq!(Language::from_tag(Language::En.tag()), Some(Language::En));
        assert_eq!(Language::from_tag("de"), None);
    }

    #[test]
    fn tour_type_tags_have_translations() {
        use crate::model::tour::TourType;
        for ty in TourType::ALL {
            assert_ne!(t(ty.tag(), Language::Fr), ty.tag());
        }
    }
}
