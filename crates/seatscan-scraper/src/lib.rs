pub mod client;
pub mod error;
pub mod pipeline;
pub mod region;
pub mod seats;
pub mod text;
pub mod types;

mod retry;

pub use client::CatalogClient;
pub use error::ScraperError;
pub use pipeline::{run_pipeline, PipelineOptions};
pub use types::{InfoEntry, RawSite};
