pub mod review_store;
pub mod user_store;
pub mod watchlist_store;
