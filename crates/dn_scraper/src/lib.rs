pub mod fetcher;
pub mod pipeline;
pub mod sample;
pub mod strategies;

pub use fetcher::{ArticleSource, NewsFetcher};
pub use pipeline::NewsPipeline;

pub mod prelude {
    pub use super::fetcher::{ArticleSource, NewsFetcher};
    pub use super::pipeline::NewsPipeline;
    pub use dn_core::{Article, Error, Result};
}
