pub mod handlers;
pub mod params;
