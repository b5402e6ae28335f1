pub mod booking;
pub mod footer;
pub mod header;
pub mod tour_card;
