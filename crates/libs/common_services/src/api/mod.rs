pub mod auth;
pub mod interfaces;
pub mod media;
pub mod review;
pub mod user;
pub mod watchlist;
