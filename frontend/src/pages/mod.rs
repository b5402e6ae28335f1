pub mod about;
pub mod admin;
pub mod auth;
pub mod blog;
pub mod book;
pub mod confirmation;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod tour_details;
pub mod tours;
