pub mod test_watchlist;
