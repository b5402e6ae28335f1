//! Shared domain logic for the tour booking application.
//!
//! Everything in this crate is plain Rust with no browser dependencies, so
//! the state container, filtering, and translation logic can be unit tested
//! natively while the `frontend` crate consumes them from WebAssembly.

pub mod filter;
pub mod i18n;
pub mod model;
pub mod state;
