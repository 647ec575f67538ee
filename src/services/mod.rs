pub mod fill_feed;
