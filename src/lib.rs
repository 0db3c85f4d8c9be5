pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
mod metrics;
pub mod recommendations;
pub mod server;
pub mod service;
pub mod vibes;

pub use catalog::{Catalog, PerfumeId, PerfumeRecord};
pub use config::Opts;
pub use error::{ScentError, ScentResult};
pub use recommendations::{RecommendationEntry, RecommendationStore};
pub use service::QueryService;
