pub mod summary;

pub use summary::{CropListing, RecommendationSummary};
