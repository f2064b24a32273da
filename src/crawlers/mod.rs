pub mod crawler;
pub mod web;

pub use crawler::{PageFetcher, StaticFetcher};
pub use web::WebDriverFetcher;
