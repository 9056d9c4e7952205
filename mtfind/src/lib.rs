pub mod config;
pub mod errors;
pub mod input;
pub mod metrics;
pub mod results;
pub mod search;

pub use config::SearchConfig;
pub use errors::{SearchError, SearchResult};
pub use results::{Match, SearchResult as SearchOutput};
