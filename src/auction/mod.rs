pub mod catalog;
pub mod model;
pub mod seed;

pub use catalog::{AuctionCatalog, CategoryCount, Filter, ListOptions};
pub use model::{get_status, Auction, AuctionStatus};
