pub mod app_user;
pub mod media;
pub mod review;
pub mod watchlist_item;
