pub mod catalog;
pub mod providers;
pub mod recommendations;

pub use catalog::Catalog;
pub use providers::omdb::OmdbProvider;
pub use providers::MetadataProvider;
pub use recommendations::{Recommender, RecommenderConfig, SimilarityRecommender};
